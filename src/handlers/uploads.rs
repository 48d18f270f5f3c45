//! # Upload Signing HTTP Handlers
//!
//! 미디어 CDN 직접 업로드용 서명 파라미터 발급 엔드포인트입니다.
//! 파일 바이트는 이 서버를 거치지 않습니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::media::request::SignUploadRequest;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::media::UploadService;

/// 업로드 서명 발급
///
/// `POST /api/v1/uploads/sign` (인증 필요)
#[post("/sign")]
pub async fn sign_upload(
    _user: AuthenticatedUser,
    payload: web::Json<SignUploadRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UploadService::instance();
    let request = payload.into_inner();
    let signed = service.sign_upload(request.folder, request.public_id)?;

    Ok(HttpResponse::Ok().json(signed))
}
