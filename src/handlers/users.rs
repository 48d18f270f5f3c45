//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 구현된 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/me` | 내 정보 조회 | 200 OK |
//! | `DELETE` | `/me` | 내 계정 삭제 | 204 No Content |

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::users::user_service::UserService;

/// 사용자 생성 핸들러
///
/// 새로운 로컬 인증 사용자 계정을 생성합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "user@example.com",
///   "username": "john_doe",
///   "display_name": "John Doe",
///   "password": "Secure123!",
///   "password_confirm": "Secure123!"
/// }
/// ```
///
/// # 응답
///
/// - 201 Created: 생성된 사용자 (민감 정보 제외)
/// - 400 Bad Request: 검증 실패
/// - 409 Conflict: 이메일/사용자명 중복
///
/// # 비즈니스 규칙
///
/// - 이메일과 사용자명은 시스템 전체에서 고유해야 함
/// - 비밀번호는 bcrypt로 해시되어 저장됨
/// - 기본 역할로 "user" 부여, 이메일 인증 필요 상태로 생성
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 내 정보 조회 핸들러
///
/// 인증된 사용자 자신의 정보를 조회합니다.
/// 비밀번호 해시 등 민감한 정보는 제외됩니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/me` (인증 필요)
#[get("")]
pub async fn get_me(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let response = service.get_user_by_id(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 내 계정 삭제 핸들러
///
/// 인증된 사용자 자신의 계정을 영구 삭제합니다 (Hard Delete).
///
/// # 엔드포인트
///
/// `DELETE /api/v1/me` (인증 필요)
#[delete("")]
pub async fn delete_me(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_user(&user.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
