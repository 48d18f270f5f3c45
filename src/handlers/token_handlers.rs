//! # Token Management HTTP Handlers
//!
//! 리프레시 토큰 갱신과 로그아웃(세션 무효화) 엔드포인트입니다.
//! 인증 미들웨어 뒤에 배치되어 `AuthenticatedUser`가 항상 존재합니다.

use actix_web::{post, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::tokens::request::RefreshRequest;
use crate::domain::dto::tokens::response::ApiResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::TokenService;

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 새 토큰 쌍으로 회전합니다.
///
/// `POST /api/v1/token/refresh` (인증 필요)
#[post("/refresh")]
pub async fn refresh_token_handler(
    user: AuthenticatedUser,
    payload: web::Json<RefreshRequest>,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();
    let user_repo = UserRepository::instance();

    let full_user = user_repo
        .find_by_id(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

    let token_pair = token_service
        .refresh_token_pair(&full_user, &payload.refresh_token)
        .await?;

    log::info!("토큰 갱신 성공: 사용자 ID {}", user.user_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(token_pair)))
}

/// 로그아웃 핸들러
///
/// 사용자의 리프레시 토큰 세션을 무효화합니다.
/// 이미 발급된 액세스 토큰은 만료까지 유효합니다 (상태 없는 JWT).
///
/// `POST /api/v1/token/logout` (인증 필요)
#[post("/logout")]
pub async fn logout_handler(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();

    token_service.revoke_session(&user.user_id).await?;

    log::info!("로그아웃: 사용자 ID {}", user.user_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "message": "로그아웃되었습니다"
    }))))
}
