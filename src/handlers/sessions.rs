//! # Collab Session HTTP Handlers
//!
//! 협업 세션 문서의 CRUD 엔드포인트입니다.
//! 실시간 이벤트는 `/ws/collab`에서 처리되고, 여기서는 세션 메타데이터와
//! 기록 조회만 담당합니다.

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::collab::request::CreateSessionRequest;
use crate::domain::dto::collab::response::{SessionResponse, SessionSummaryResponse};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::collab::SessionService;

/// 협업 세션 생성
///
/// 참가용 세션 코드가 발급되며, 호스트가 첫 참가자가 됩니다.
///
/// `POST /api/v1/sessions` (인증 필요)
#[post("")]
pub async fn create_session(
    user: AuthenticatedUser,
    payload: web::Json<CreateSessionRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = SessionService::instance();
    let session = service.create_session(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(SessionResponse::from(session)))
}

/// 내가 참가한 세션 목록 조회 (요약)
///
/// `GET /api/v1/sessions` (인증 필요)
#[get("")]
pub async fn list_sessions(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = SessionService::instance();
    let sessions = service.list_sessions(&user.user_id).await?;

    let summaries: Vec<SessionSummaryResponse> = sessions
        .into_iter()
        .map(SessionSummaryResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(summaries))
}

/// 세션 상세 조회 (참가자 전용)
///
/// `GET /api/v1/sessions/{session_id}` (인증 필요)
#[get("/{session_id}")]
pub async fn get_session(
    user: AuthenticatedUser,
    session_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = SessionService::instance();
    let session = service.get_session(&user.user_id, &session_id).await?;

    Ok(HttpResponse::Ok().json(SessionResponse::from(session)))
}

/// 세션 코드로 조회
///
/// 코드가 초대장 역할을 하므로 참가 전 미리보기에 사용됩니다.
///
/// `GET /api/v1/sessions/code/{session_code}` (인증 필요)
#[get("/code/{session_code}")]
pub async fn get_session_by_code(
    _user: AuthenticatedUser,
    session_code: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = SessionService::instance();
    let session = service.get_session_by_code(&session_code).await?;

    Ok(HttpResponse::Ok().json(SessionSummaryResponse::from(session)))
}

/// 세션 종료 (호스트 전용)
///
/// `POST /api/v1/sessions/code/{session_code}/close` (인증 필요)
#[post("/code/{session_code}/close")]
pub async fn close_session(
    user: AuthenticatedUser,
    session_code: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = SessionService::instance();
    service.close_session(&user.user_id, &session_code).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "세션이 종료되었습니다"
    })))
}

/// 세션 삭제 (호스트 전용)
///
/// `DELETE /api/v1/sessions/{session_id}` (인증 필요)
#[delete("/{session_id}")]
pub async fn delete_session(
    user: AuthenticatedUser,
    session_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = SessionService::instance();
    service.delete_session(&user.user_id, &session_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
