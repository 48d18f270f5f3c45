//! # Website Builder HTTP Handlers
//!
//! 웹사이트 빌더 저장소의 CRUD 엔드포인트입니다.
//! 공개 사이트 조회(`GET /sites/{slug}`)를 제외한 모든 작업은
//! 인증 미들웨어 뒤에서 소유자 기준으로 동작합니다.

use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::websites::request::{CreateWebsiteRequest, PublishRequest, UpdateWebsiteRequest};
use crate::domain::dto::websites::response::{WebsiteResponse, WebsiteSummaryResponse};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::websites::WebsiteService;

/// 웹사이트 생성
///
/// `POST /api/v1/websites` (인증 필요)
#[post("")]
pub async fn create_website(
    user: AuthenticatedUser,
    payload: web::Json<CreateWebsiteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = WebsiteService::instance();
    let site = service.create_website(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(WebsiteResponse::from(site)))
}

/// 내 웹사이트 목록 조회 (요약)
///
/// `GET /api/v1/websites` (인증 필요)
#[get("")]
pub async fn list_websites(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = WebsiteService::instance();
    let sites = service.list_websites(&user.user_id).await?;

    let summaries: Vec<WebsiteSummaryResponse> = sites
        .into_iter()
        .map(WebsiteSummaryResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(summaries))
}

/// 웹사이트 상세 조회
///
/// `GET /api/v1/websites/{website_id}` (인증 필요, 소유자 전용)
#[get("/{website_id}")]
pub async fn get_website(
    user: AuthenticatedUser,
    website_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = WebsiteService::instance();
    let site = service.get_owned_website(&user.user_id, &website_id).await?;

    Ok(HttpResponse::Ok().json(WebsiteResponse::from(site)))
}

/// 웹사이트 수정 (메타데이터/페이지 트리)
///
/// `PUT /api/v1/websites/{website_id}` (인증 필요, 소유자 전용)
#[put("/{website_id}")]
pub async fn update_website(
    user: AuthenticatedUser,
    website_id: web::Path<String>,
    payload: web::Json<UpdateWebsiteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = WebsiteService::instance();
    let site = service
        .update_website(&user.user_id, &website_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(WebsiteResponse::from(site)))
}

/// 공개 상태 변경
///
/// `PATCH /api/v1/websites/{website_id}/publish` (인증 필요, 소유자 전용)
#[patch("/{website_id}/publish")]
pub async fn publish_website(
    user: AuthenticatedUser,
    website_id: web::Path<String>,
    payload: web::Json<PublishRequest>,
) -> Result<HttpResponse, AppError> {
    let service = WebsiteService::instance();
    let site = service
        .set_published(&user.user_id, &website_id, payload.published)
        .await?;

    Ok(HttpResponse::Ok().json(WebsiteResponse::from(site)))
}

/// 웹사이트 삭제
///
/// `DELETE /api/v1/websites/{website_id}` (인증 필요, 소유자 전용)
#[delete("/{website_id}")]
pub async fn delete_website(
    user: AuthenticatedUser,
    website_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = WebsiteService::instance();
    service.delete_website(&user.user_id, &website_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 공개 사이트 조회 (인증 불필요)
///
/// 공개(published)된 사이트만 슬러그로 조회됩니다.
///
/// `GET /api/v1/sites/{slug}`
#[get("/{slug}")]
pub async fn get_published_site(
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = WebsiteService::instance();
    let site = service.get_published_by_slug(&slug).await?;

    Ok(HttpResponse::Ok().json(WebsiteResponse::from(site)))
}
