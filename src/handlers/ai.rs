//! # AI Assist HTTP Handlers
//!
//! 생성형 AI 브리지 엔드포인트입니다.
//! 코드 어시스트는 대상 세션의 채팅 기록을 함께 갱신하고,
//! 번역은 상태 변경 없이 응답만 반환합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::collab::request::{AiAssistRequest, TranslateRequest};
use crate::domain::dto::collab::response::{AiAssistResponse, TranslateResponse};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::collab::AiAssistService;

/// 코드 어시스트 핸들러
///
/// 코드 선택 영역과 액션 태그(explain/refactor/debug/complete)를 받아
/// AI 응답을 반환하고, 요청 요약과 응답을 세션 채팅 기록에 추가합니다.
///
/// `POST /api/v1/ai/assist` (인증 필요, 세션 참가자 전용)
#[post("/assist")]
pub async fn ai_assist(
    user: AuthenticatedUser,
    payload: web::Json<AiAssistRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = AiAssistService::instance();
    let request = payload.into_inner();

    let reply = service
        .assist(
            &user.user_id,
            &request.session_code,
            request.action,
            &request.code,
            request.language.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(AiAssistResponse {
        action: request.action.as_str().to_string(),
        reply,
    }))
}

/// 번역 핸들러
///
/// `POST /api/v1/ai/translate` (인증 필요)
#[post("/translate")]
pub async fn translate(
    _user: AuthenticatedUser,
    payload: web::Json<TranslateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = AiAssistService::instance();
    let request = payload.into_inner();

    let translated = service
        .translate(&request.text, &request.target_language)
        .await?;

    Ok(HttpResponse::Ok().json(TranslateResponse {
        target_language: request.target_language,
        translated,
    }))
}
