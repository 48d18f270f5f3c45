//! # 웹사이트 리포지토리 구현
//!
//! 웹사이트 문서의 데이터 액세스 계층입니다.
//! 슬러그 고유성은 유니크 인덱스와 생성 전 중복 검사로 보장하며,
//! 공개 사이트의 슬러그 조회는 Redis로 캐싱합니다.
//!
//! ## 캐싱 전략
//!
//! - **캐시 키**: `website:{id}`, `website:slug:{slug}` (공개 사이트만)
//! - **TTL**: 600초 (10분)
//!
//! ## 인덱스
//!
//! slug(unique), owner_id + updated_at(desc)

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::websites::website::Website,
};

/// 웹사이트 데이터 액세스 리포지토리
#[repository(name = "website", collection = "websites")]
pub struct WebsiteRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl WebsiteRepository {
    fn slug_cache_key(slug: &str) -> String {
        format!("website:slug:{}", slug)
    }

    /// ID로 웹사이트를 조회합니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Website>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Website>(&cache_key).await {
            return Ok(Some(cached));
        }

        let site = self.collection::<Website>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref site) = site {
            let _ = self.redis.set_with_expiry(&cache_key, site, 600).await;
        }

        Ok(site)
    }

    /// 슬러그로 웹사이트를 조회합니다. 공개 여부와 무관하게 반환합니다.
    ///
    /// 슬러그 중복 검사와 공개 조회가 공용으로 사용하므로
    /// 캐시는 공개 조회 경로([`find_published_by_slug`])에서만 적용합니다.
    ///
    /// [`find_published_by_slug`]: WebsiteRepository::find_published_by_slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Website>, AppError> {
        self.collection::<Website>()
            .find_one(doc! { "slug": slug })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 공개된 웹사이트를 슬러그로 조회합니다. 캐시 우선 조회입니다.
    pub async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Website>, AppError> {
        let cache_key = Self::slug_cache_key(slug);

        if let Ok(Some(cached)) = self.redis.get::<Website>(&cache_key).await {
            return Ok(Some(cached));
        }

        let site = self.collection::<Website>()
            .find_one(doc! { "slug": slug, "published": true })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref site) = site {
            let _ = self.redis.set_with_expiry(&cache_key, site, 600).await;
        }

        Ok(site)
    }

    /// 소유자의 웹사이트 목록을 최근 수정 순으로 반환합니다.
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Website>, AppError> {
        let cursor = self.collection::<Website>()
            .find(doc! { "owner_id": owner_id })
            .sort(doc! { "updated_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 웹사이트를 저장합니다. 슬러그 중복은 호출 전에 해소되어 있어야 합니다.
    pub async fn create(&self, mut site: Website) -> Result<Website, AppError> {
        let result = self.collection::<Website>()
            .insert_one(&site)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        site.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("생성된 웹사이트 ID를 확인할 수 없습니다".to_string())
        })?);

        Ok(site)
    }

    /// 웹사이트를 부분 업데이트하고 최신 문서를 반환합니다.
    ///
    /// 슬러그 캐시는 사이트의 이전/현재 슬러그를 모두 무효화합니다.
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<Website>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Website>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref site) = updated {
            let _ = self.invalidate_cache(id).await;
            let _ = self.redis.del(&Self::slug_cache_key(&site.slug)).await;
        }

        Ok(updated)
    }

    /// 웹사이트를 영구 삭제합니다. 삭제 여부를 반환합니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        // 슬러그 캐시 무효화를 위해 먼저 조회한다
        let existing = self.find_by_id(id).await?;

        let Some(site) = existing else {
            return Ok(false);
        };

        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Website>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(id).await;
            let _ = self.redis.del(&Self::slug_cache_key(&site.slug)).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 웹사이트 컬렉션 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Website>();

        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("slug_unique".to_string())
                .build())
            .build();

        let owner_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "updated_at": -1 })
            .options(IndexOptions::builder()
                .name("owner_updated_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([slug_index, owner_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
