//! # 지원 내역 리포지토리 구현
//!
//! 구직 지원 내역 문서의 데이터 액세스 계층입니다.
//! 개인 대시보드 전용 데이터라 조회 패턴이 소유자 중심이므로
//! 캐싱 없이 owner_id 복합 인덱스로 충분합니다.
//!
//! ## 인덱스
//!
//! owner_id + status, owner_id + updated_at(desc)

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::jobs::job_application::{ApplicationStatus, JobApplication},
};

/// 지원 내역 데이터 액세스 리포지토리
#[repository(name = "job", collection = "job_applications")]
pub struct JobRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
}

impl JobRepository {
    /// ID로 지원 내역을 조회합니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<JobApplication>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<JobApplication>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자의 지원 내역 목록을 반환합니다. 상태 필터는 선택적입니다.
    pub async fn list_by_owner(
        &self,
        owner_id: &str,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<JobApplication>, AppError> {
        let mut filter = doc! { "owner_id": owner_id };
        if let Some(status) = status {
            filter.insert("status", status.as_str());
        }

        let cursor = self.collection::<JobApplication>()
            .find(filter)
            .sort(doc! { "updated_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 지원 내역을 저장합니다.
    pub async fn create(&self, mut app: JobApplication) -> Result<JobApplication, AppError> {
        let result = self.collection::<JobApplication>()
            .insert_one(&app)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        app.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("생성된 지원 내역 ID를 확인할 수 없습니다".to_string())
        })?);

        Ok(app)
    }

    /// 지원 내역을 부분 업데이트하고 최신 문서를 반환합니다.
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<JobApplication>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<JobApplication>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 지원 내역을 영구 삭제합니다. 삭제 여부를 반환합니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<JobApplication>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 지원 내역 컬렉션 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<JobApplication>();

        let owner_status_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "status": 1 })
            .options(IndexOptions::builder()
                .name("owner_status".to_string())
                .build())
            .build();

        let owner_updated_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "updated_at": -1 })
            .options(IndexOptions::builder()
                .name("owner_updated_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([owner_status_index, owner_updated_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
