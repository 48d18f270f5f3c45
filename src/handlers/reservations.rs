//! # Reservation HTTP Handlers
//!
//! 레스토랑 예약 관리의 CRUD/상태 엔드포인트입니다.
//! 전부 인증 미들웨어 뒤에서 소유자(매장 운영자) 기준으로 동작합니다.

use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::reservations::request::{
    CreateReservationRequest, ReservationListQuery, SetReservationStatusRequest,
    UpdateReservationRequest,
};
use crate::domain::dto::reservations::response::ReservationResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::reservations::ReservationService;

/// 예약 생성
///
/// 같은 테이블의 기존 예약과 시간이 겹치면 409로 거부됩니다.
///
/// `POST /api/v1/reservations` (인증 필요)
#[post("")]
pub async fn create_reservation(
    user: AuthenticatedUser,
    payload: web::Json<CreateReservationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ReservationService::instance();
    let reservation = service
        .create_reservation(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ReservationResponse::from(reservation)))
}

/// 예약 목록 조회 (하루 또는 날짜 범위)
///
/// `GET /api/v1/reservations?date=2026-08-15`
/// `GET /api/v1/reservations?from=2026-08-15&to=2026-08-21` (인증 필요)
#[get("")]
pub async fn list_reservations(
    user: AuthenticatedUser,
    query: web::Query<ReservationListQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ReservationService::instance();
    let query = query.into_inner();
    let reservations = service
        .list_reservations(&user.user_id, query.date, query.from, query.to)
        .await?;

    let responses: Vec<ReservationResponse> = reservations
        .into_iter()
        .map(ReservationResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// 예약 상세 조회
///
/// `GET /api/v1/reservations/{reservation_id}` (인증 필요, 소유자 전용)
#[get("/{reservation_id}")]
pub async fn get_reservation(
    user: AuthenticatedUser,
    reservation_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ReservationService::instance();
    let reservation = service
        .get_owned_reservation(&user.user_id, &reservation_id)
        .await?;

    Ok(HttpResponse::Ok().json(ReservationResponse::from(reservation)))
}

/// 예약 수정
///
/// `PUT /api/v1/reservations/{reservation_id}` (인증 필요, 소유자 전용)
#[put("/{reservation_id}")]
pub async fn update_reservation(
    user: AuthenticatedUser,
    reservation_id: web::Path<String>,
    payload: web::Json<UpdateReservationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ReservationService::instance();
    let reservation = service
        .update_reservation(&user.user_id, &reservation_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ReservationResponse::from(reservation)))
}

/// 예약 상태 변경 (confirmed/seated/completed/cancelled/no_show)
///
/// `PATCH /api/v1/reservations/{reservation_id}/status` (인증 필요, 소유자 전용)
#[patch("/{reservation_id}/status")]
pub async fn set_reservation_status(
    user: AuthenticatedUser,
    reservation_id: web::Path<String>,
    payload: web::Json<SetReservationStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ReservationService::instance();
    let reservation = service
        .set_status(&user.user_id, &reservation_id, payload.status)
        .await?;

    Ok(HttpResponse::Ok().json(ReservationResponse::from(reservation)))
}

/// 예약 삭제
///
/// `DELETE /api/v1/reservations/{reservation_id}` (인증 필요, 소유자 전용)
#[delete("/{reservation_id}")]
pub async fn delete_reservation(
    user: AuthenticatedUser,
    reservation_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ReservationService::instance();
    service.delete_reservation(&user.user_id, &reservation_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
