//! # Authentication HTTP Handlers
//!
//! 로컬 로그인, Google OAuth 플로우, 토큰 검증 엔드포인트입니다.
//! 로컬과 OAuth 로그인은 동일한 구조의 응답(JWT 토큰 쌍 + 사용자 정보)을
//! 반환합니다.

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LocalLoginRequest, OAuthCallbackQuery};
use crate::services::auth::{GoogleAuthService, TokenService};
use crate::services::users::user_service::UserService;

/// 로컬 로그인 핸들러
///
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn local_login(
    payload: web::Json<LocalLoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let token_service = TokenService::instance();

    // 사용자 인증
    let user = user_service
        .verify_password(&payload.email, &payload.password)
        .await?;

    let user_id = user.id_string().unwrap_or_default();
    log::info!("로컬 로그인 시도 - 사용자: {}, ID: {}", payload.email, user_id);

    // JWT 토큰 쌍 생성 + Redis 세션 저장
    let token_pair = token_service
        .generate_token_pair(&user)
        .await
        .map_err(|e| {
            log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", payload.email, e);
            AppError::InternalError(format!("토큰 생성 실패: {}", e))
        })?;

    let response = json!({
        "user": {
            "id": user_id,
            "username": user.username,
            "email": user.email,
            "roles": user.roles,
            "auth_provider": user.auth_provider,
            "is_active": user.is_active,
            "created_at": user.created_at,
            "updated_at": user.updated_at
        },
        "access_token": token_pair.access_token,
        "refresh_token": token_pair.refresh_token.unwrap_or_default(),
        "expires_in": token_pair.expires_in,
        "token_type": "Bearer"
    });

    Ok(HttpResponse::Ok().json(response))
}

/// Google 로그인 URL 발급 핸들러
///
/// `GET /api/v1/auth/google/login`
#[get("/google/login")]
pub async fn google_login_url() -> Result<HttpResponse, AppError> {
    let google_service = GoogleAuthService::instance();
    let url_response = google_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// Google OAuth 콜백 핸들러
///
/// `GET /api/v1/auth/google/callback`
#[get("/google/callback")]
pub async fn google_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query.error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("Google OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    // 유효성 검사
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let google_service = GoogleAuthService::instance();
    let token_service = TokenService::instance();

    // Google OAuth 인증 처리
    let user = google_service
        .authenticate_with_code(&query.code, &query.state)
        .await?;

    // JWT 토큰 쌍 생성 (Local 로그인과 동일한 방식)
    let token_pair = token_service
        .generate_token_pair(&user)
        .await
        .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))?;

    let response = json!({
        "user": {
            "id": user.id_string().unwrap_or_default(),
            "username": user.username,
            "email": user.email,
            "roles": user.roles,
            "auth_provider": user.auth_provider,
            "is_active": user.is_active,
            "created_at": user.created_at,
            "updated_at": user.updated_at
        },
        "access_token": token_pair.access_token,
        "refresh_token": token_pair.refresh_token.unwrap_or_default(),
        "expires_in": token_pair.expires_in,
        "token_type": "Bearer"
    });

    log::info!("Google OAuth 로그인 성공: {}", user.email);
    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 검증 핸들러
///
/// `POST /api/v1/auth/verify`
#[post("/verify")]
pub async fn verify_token(
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();

    // Authorization 헤더에서 토큰 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;

    Ok(HttpResponse::Ok().json(json!({
        "valid": true,
        "user_id": claims.sub,
        "auth_provider": claims.auth_provider
    })))
}

/// 현재 사용자 조회 핸들러
///
/// 미들웨어 없이 Authorization 헤더만으로 동작하는 경량 버전입니다.
///
/// `GET /api/v1/auth/me`
#[get("/me")]
pub async fn get_current_user(
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();
    let user_service = UserService::instance();

    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let user_id = token_service.extract_user_id(token)?;

    // 데이터베이스에서 최신 사용자 정보 조회
    let user = user_service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}
