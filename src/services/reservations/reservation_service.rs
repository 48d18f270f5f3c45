//! # 예약 관리 서비스 구현
//!
//! 예약의 비즈니스 로직입니다.
//! 소유권 검사, 하루/기간 조회, 같은 테이블의 시간 겹침 검증을 담당합니다.
//!
//! 겹침 검사는 같은 날짜의 예약을 읽어 엔티티의 구간 교차 판정으로
//! 수행합니다. 문서 단위 원자성만 제공하는 저장소 특성상 검사-삽입 사이의
//! 레이스는 감수합니다 (운영자 한 명이 쓰는 캘린더라는 사용 패턴 전제).

use std::sync::Arc;
use mongodb::bson::doc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::dto::reservations::request::{CreateReservationRequest, UpdateReservationRequest},
    domain::entities::reservations::reservation::{Reservation, ReservationStatus},
    repositories::reservations::reservation_repo::ReservationRepository,
    utils::string_utils::clean_optional_string,
};

/// 기본 점유 시간 (분)
const DEFAULT_DURATION_MINUTES: u32 = 90;

/// 예약 관리 비즈니스 로직 서비스
#[service(name = "reservation")]
pub struct ReservationService {
    /// 예약 리포지토리 (자동 주입)
    reservation_repo: Arc<ReservationRepository>,
}

impl ReservationService {
    /// 새 예약을 생성합니다.
    ///
    /// 같은 테이블의 기존 예약과 시간이 겹치면 `ConflictError`(409)입니다.
    pub async fn create_reservation(
        &self,
        owner_id: &str,
        request: CreateReservationRequest,
    ) -> Result<Reservation, AppError> {
        let mut reservation = Reservation::new(
            owner_id.to_string(),
            request.guest_name,
            request.party_size,
            request.date,
            request.time,
            request.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
        );

        reservation.guest_phone = clean_optional_string(request.guest_phone);
        reservation.table_label = clean_optional_string(request.table_label);
        reservation.notes = clean_optional_string(request.notes);

        self.ensure_no_table_conflict(&reservation, None).await?;

        self.reservation_repo.create(reservation).await
    }

    /// 소유자 검사를 포함해 예약을 조회합니다.
    pub async fn get_owned_reservation(&self, owner_id: &str, id: &str) -> Result<Reservation, AppError> {
        let reservation = self.reservation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("예약을 찾을 수 없습니다".to_string()))?;

        if !reservation.is_owned_by(owner_id) {
            return Err(AppError::AuthorizationError("해당 예약에 대한 권한이 없습니다".to_string()));
        }

        Ok(reservation)
    }

    /// 특정 날짜 또는 날짜 범위의 예약 목록을 반환합니다.
    ///
    /// `date`가 있으면 하루 조회, 없으면 `from`/`to` 범위 조회입니다.
    pub async fn list_reservations(
        &self,
        owner_id: &str,
        date: Option<String>,
        from: Option<String>,
        to: Option<String>,
    ) -> Result<Vec<Reservation>, AppError> {
        match (date, from, to) {
            (Some(date), _, _) => self.reservation_repo.list_by_date(owner_id, &date).await,
            (None, Some(from), Some(to)) => {
                if from > to {
                    return Err(AppError::ValidationError("시작 날짜가 종료 날짜보다 늦습니다".to_string()));
                }
                self.reservation_repo.list_by_date_range(owner_id, &from, &to).await
            }
            _ => Err(AppError::ValidationError(
                "date 또는 from/to 날짜 범위를 지정해주세요".to_string(),
            )),
        }
    }

    /// 예약 정보를 수정합니다. 시간/테이블 변경 시 겹침을 재검증합니다.
    pub async fn update_reservation(
        &self,
        owner_id: &str,
        id: &str,
        request: UpdateReservationRequest,
    ) -> Result<Reservation, AppError> {
        let existing = self.get_owned_reservation(owner_id, id).await?;

        // 변경 결과를 엔티티에 먼저 반영해 겹침을 검사한다
        let mut candidate = existing.clone();
        if let Some(ref guest_name) = request.guest_name {
            candidate.guest_name = guest_name.clone();
        }
        if let Some(guest_phone) = clean_optional_string(request.guest_phone.clone()) {
            candidate.guest_phone = Some(guest_phone);
        }
        if let Some(party_size) = request.party_size {
            candidate.party_size = party_size;
        }
        if let Some(ref date) = request.date {
            candidate.date = date.clone();
        }
        if let Some(ref time) = request.time {
            candidate.time = time.clone();
        }
        if let Some(duration) = request.duration_minutes {
            candidate.duration_minutes = duration;
        }
        if let Some(table_label) = clean_optional_string(request.table_label.clone()) {
            candidate.table_label = Some(table_label);
        }

        self.ensure_no_table_conflict(&candidate, Some(id)).await?;

        let mut update_doc = doc! {
            "guest_name": &candidate.guest_name,
            "party_size": candidate.party_size,
            "date": &candidate.date,
            "time": &candidate.time,
            "duration_minutes": candidate.duration_minutes,
            "updated_at": mongodb::bson::DateTime::now(),
        };
        if let Some(ref guest_phone) = candidate.guest_phone {
            update_doc.insert("guest_phone", guest_phone);
        }
        if let Some(ref table_label) = candidate.table_label {
            update_doc.insert("table_label", table_label);
        }
        if let Some(notes) = clean_optional_string(request.notes) {
            update_doc.insert("notes", notes);
        }

        self.reservation_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("예약을 찾을 수 없습니다".to_string()))
    }

    /// 예약 상태를 변경합니다 (confirmed/seated/completed/cancelled/no_show).
    pub async fn set_status(
        &self,
        owner_id: &str,
        id: &str,
        status: ReservationStatus,
    ) -> Result<Reservation, AppError> {
        self.get_owned_reservation(owner_id, id).await?;

        let status_bson = mongodb::bson::to_bson(&status)
            .map_err(|e| AppError::InternalError(format!("상태 직렬화 실패: {}", e)))?;

        self.reservation_repo
            .update(id, doc! {
                "status": status_bson,
                "updated_at": mongodb::bson::DateTime::now(),
            })
            .await?
            .ok_or_else(|| AppError::NotFound("예약을 찾을 수 없습니다".to_string()))
    }

    /// 예약을 삭제합니다.
    pub async fn delete_reservation(&self, owner_id: &str, id: &str) -> Result<(), AppError> {
        self.get_owned_reservation(owner_id, id).await?;

        let deleted = self.reservation_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("예약을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 같은 날짜/테이블의 겹치는 예약이 있는지 검사합니다.
    ///
    /// `exclude_id`는 수정 중인 예약 자신을 후보에서 제외할 때 사용합니다.
    async fn ensure_no_table_conflict(
        &self,
        candidate: &Reservation,
        exclude_id: Option<&str>,
    ) -> Result<(), AppError> {
        // 테이블 미배정 예약은 검사 대상이 아니다
        if candidate.table_label.is_none() {
            return Ok(());
        }

        let same_day = self.reservation_repo
            .list_by_date(&candidate.owner_id, &candidate.date)
            .await?;

        for existing in same_day {
            if let Some(exclude_id) = exclude_id {
                if existing.id_string().as_deref() == Some(exclude_id) {
                    continue;
                }
            }

            if candidate.conflicts_with(&existing) {
                return Err(AppError::ConflictError(format!(
                    "{} 테이블의 {} {} 예약과 시간이 겹칩니다",
                    existing.table_label.as_deref().unwrap_or("?"),
                    existing.date,
                    existing.time,
                )));
            }
        }

        Ok(())
    }
}
