//! # Job Tracker HTTP Handlers
//!
//! 구직 지원 트래커의 CRUD/상태 전이 엔드포인트입니다.
//! 전부 인증 미들웨어 뒤에서 소유자 기준으로 동작합니다.

use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::jobs::request::{
    CreateJobApplicationRequest, JobListQuery, TransitionStatusRequest, UpdateJobApplicationRequest,
};
use crate::domain::dto::jobs::response::JobApplicationResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::jobs::JobService;

/// 지원 내역 생성
///
/// `POST /api/v1/jobs` (인증 필요)
#[post("")]
pub async fn create_application(
    user: AuthenticatedUser,
    payload: web::Json<CreateJobApplicationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = JobService::instance();
    let app = service.create_application(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(JobApplicationResponse::from(app)))
}

/// 지원 내역 목록 조회 (상태 필터 선택)
///
/// `GET /api/v1/jobs?status=interviewing` (인증 필요)
#[get("")]
pub async fn list_applications(
    user: AuthenticatedUser,
    query: web::Query<JobListQuery>,
) -> Result<HttpResponse, AppError> {
    let service = JobService::instance();
    let apps = service.list_applications(&user.user_id, query.status).await?;

    let responses: Vec<JobApplicationResponse> = apps
        .into_iter()
        .map(JobApplicationResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// 지원 내역 상세 조회
///
/// `GET /api/v1/jobs/{job_id}` (인증 필요, 소유자 전용)
#[get("/{job_id}")]
pub async fn get_application(
    user: AuthenticatedUser,
    job_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = JobService::instance();
    let app = service.get_owned_application(&user.user_id, &job_id).await?;

    Ok(HttpResponse::Ok().json(JobApplicationResponse::from(app)))
}

/// 지원 내역 수정 (상태 제외)
///
/// `PUT /api/v1/jobs/{job_id}` (인증 필요, 소유자 전용)
#[put("/{job_id}")]
pub async fn update_application(
    user: AuthenticatedUser,
    job_id: web::Path<String>,
    payload: web::Json<UpdateJobApplicationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = JobService::instance();
    let app = service
        .update_application(&user.user_id, &job_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(JobApplicationResponse::from(app)))
}

/// 지원 상태 전이
///
/// 파이프라인 규칙에 어긋나는 전이는 409로 거부됩니다.
///
/// `PATCH /api/v1/jobs/{job_id}/status` (인증 필요, 소유자 전용)
#[patch("/{job_id}/status")]
pub async fn transition_status(
    user: AuthenticatedUser,
    job_id: web::Path<String>,
    payload: web::Json<TransitionStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let service = JobService::instance();
    let app = service
        .transition_status(&user.user_id, &job_id, payload.status)
        .await?;

    Ok(HttpResponse::Ok().json(JobApplicationResponse::from(app)))
}

/// 지원 내역 삭제
///
/// `DELETE /api/v1/jobs/{job_id}` (인증 필요, 소유자 전용)
#[delete("/{job_id}")]
pub async fn delete_application(
    user: AuthenticatedUser,
    job_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = JobService::instance();
    service.delete_application(&user.user_id, &job_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
