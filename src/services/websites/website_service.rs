//! # 웹사이트 빌더 서비스 구현
//!
//! 웹사이트 문서의 비즈니스 로직입니다.
//! 슬러그 파생/중복 해소, 소유권 검사, 공개 상태 전환을 담당합니다.
//!
//! ## 비즈니스 규칙
//!
//! - 슬러그는 제목에서 파생되며 전역적으로 고유하다 (충돌 시 숫자 접미사)
//! - 비공개 작업은 전부 소유자 전용이다 (타인 접근은 403)
//! - 슬러그 공개 조회는 published 사이트만 반환한다

use std::sync::Arc;
use mongodb::bson::{doc, to_bson};
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::dto::websites::request::{CreateWebsiteRequest, UpdateWebsiteRequest},
    domain::entities::websites::website::Website,
    repositories::websites::website_repo::WebsiteRepository,
    utils::string_utils::slugify,
};

/// 웹사이트 빌더 비즈니스 로직 서비스
#[service(name = "website")]
pub struct WebsiteService {
    /// 웹사이트 리포지토리 (자동 주입)
    website_repo: Arc<WebsiteRepository>,
}

impl WebsiteService {
    /// 새 웹사이트를 생성합니다. 슬러그는 제목에서 파생됩니다.
    pub async fn create_website(&self, owner_id: &str, request: CreateWebsiteRequest) -> Result<Website, AppError> {
        let slug = self.generate_unique_slug(&request.title).await?;

        let site = Website::new(
            owner_id.to_string(),
            request.title,
            slug,
            request.description,
            request.theme,
        );

        self.website_repo.create(site).await
    }

    /// 소유자 검사를 포함해 웹사이트를 조회합니다.
    pub async fn get_owned_website(&self, owner_id: &str, id: &str) -> Result<Website, AppError> {
        let site = self.website_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("웹사이트를 찾을 수 없습니다".to_string()))?;

        if !site.is_owned_by(owner_id) {
            return Err(AppError::AuthorizationError("해당 웹사이트에 대한 권한이 없습니다".to_string()));
        }

        Ok(site)
    }

    /// 공개된 웹사이트를 슬러그로 조회합니다 (인증 불필요).
    pub async fn get_published_by_slug(&self, slug: &str) -> Result<Website, AppError> {
        self.website_repo
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("공개된 웹사이트를 찾을 수 없습니다".to_string()))
    }

    /// 소유자의 웹사이트 목록을 반환합니다.
    pub async fn list_websites(&self, owner_id: &str) -> Result<Vec<Website>, AppError> {
        self.website_repo.list_by_owner(owner_id).await
    }

    /// 웹사이트 메타데이터/페이지를 수정합니다.
    ///
    /// 제목이 바뀌어도 슬러그는 유지됩니다. 공개 URL 안정성이 우선입니다.
    pub async fn update_website(
        &self,
        owner_id: &str,
        id: &str,
        request: UpdateWebsiteRequest,
    ) -> Result<Website, AppError> {
        self.get_owned_website(owner_id, id).await?;

        let mut update_doc = doc! {};

        if let Some(title) = request.title {
            update_doc.insert("title", title);
        }
        if let Some(description) = request.description {
            update_doc.insert("description", description);
        }
        if let Some(theme) = request.theme {
            update_doc.insert("theme", theme);
        }
        if let Some(pages) = request.pages {
            let pages_bson = to_bson(&pages)
                .map_err(|e| AppError::InternalError(format!("페이지 직렬화 실패: {}", e)))?;
            update_doc.insert("pages", pages_bson);
        }

        if update_doc.is_empty() {
            return Err(AppError::ValidationError("변경할 내용이 없습니다".to_string()));
        }

        update_doc.insert("updated_at", mongodb::bson::DateTime::now());

        self.website_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("웹사이트를 찾을 수 없습니다".to_string()))
    }

    /// 공개 상태를 변경합니다.
    pub async fn set_published(&self, owner_id: &str, id: &str, published: bool) -> Result<Website, AppError> {
        self.get_owned_website(owner_id, id).await?;

        self.website_repo
            .update(id, doc! {
                "published": published,
                "updated_at": mongodb::bson::DateTime::now(),
            })
            .await?
            .ok_or_else(|| AppError::NotFound("웹사이트를 찾을 수 없습니다".to_string()))
    }

    /// 웹사이트를 삭제합니다.
    pub async fn delete_website(&self, owner_id: &str, id: &str) -> Result<(), AppError> {
        self.get_owned_website(owner_id, id).await?;

        let deleted = self.website_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("웹사이트를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 제목에서 중복 없는 슬러그를 만듭니다.
    ///
    /// 기본 슬러그가 사용 중이면 숫자 접미사를 증가시키며 시도합니다.
    async fn generate_unique_slug(&self, title: &str) -> Result<String, AppError> {
        let base = slugify(title);
        let mut slug = base.clone();
        let mut counter = 1;

        loop {
            match self.website_repo.find_by_slug(&slug).await? {
                None => return Ok(slug),
                Some(_) => {
                    slug = format!("{}-{}", base, counter);
                    counter += 1;

                    if counter > 1000 {
                        return Err(AppError::InternalError("슬러그 생성 실패".to_string()));
                    }
                }
            }
        }
    }
}
