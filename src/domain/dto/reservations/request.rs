//! 예약 관리 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::entities::reservations::reservation::{
    is_valid_date, is_valid_time, ReservationStatus,
};

fn validate_date_format(date: &str) -> Result<(), ValidationError> {
    if !is_valid_date(date) {
        return Err(ValidationError::new("invalid_date")
            .with_message("날짜는 YYYY-MM-DD 형식이어야 합니다".into()));
    }
    Ok(())
}

fn validate_time_format(time: &str) -> Result<(), ValidationError> {
    if !is_valid_time(time) {
        return Err(ValidationError::new("invalid_time")
            .with_message("시간은 HH:MM 형식이어야 합니다".into()));
    }
    Ok(())
}

/// 예약 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    #[validate(length(min = 1, max = 50, message = "예약자 이름은 1-50자 사이여야 합니다"))]
    pub guest_name: String,

    pub guest_phone: Option<String>,

    #[validate(range(min = 1, max = 50, message = "인원은 1-50명 사이여야 합니다"))]
    pub party_size: u32,

    #[validate(custom(function = "validate_date_format"))]
    pub date: String,

    #[validate(custom(function = "validate_time_format"))]
    pub time: String,

    /// 점유 시간 (분). 생략 시 90분.
    #[validate(range(min = 15, max = 480, message = "점유 시간은 15-480분 사이여야 합니다"))]
    pub duration_minutes: Option<u32>,

    pub table_label: Option<String>,
    pub notes: Option<String>,
}

/// 예약 수정 요청. 전달된 필드만 변경됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReservationRequest {
    #[validate(length(min = 1, max = 50, message = "예약자 이름은 1-50자 사이여야 합니다"))]
    pub guest_name: Option<String>,

    pub guest_phone: Option<String>,

    #[validate(range(min = 1, max = 50, message = "인원은 1-50명 사이여야 합니다"))]
    pub party_size: Option<u32>,

    #[validate(custom(function = "validate_date_format"))]
    pub date: Option<String>,

    #[validate(custom(function = "validate_time_format"))]
    pub time: Option<String>,

    #[validate(range(min = 15, max = 480, message = "점유 시간은 15-480분 사이여야 합니다"))]
    pub duration_minutes: Option<u32>,

    pub table_label: Option<String>,
    pub notes: Option<String>,
}

/// 상태 변경 요청
#[derive(Debug, Deserialize)]
pub struct SetReservationStatusRequest {
    pub status: ReservationStatus,
}

/// 날짜(또는 날짜 범위) 목록 조회 쿼리
#[derive(Debug, Deserialize, Validate)]
pub struct ReservationListQuery {
    #[validate(custom(function = "validate_date_format"))]
    pub date: Option<String>,

    #[validate(custom(function = "validate_date_format"))]
    pub from: Option<String>,

    #[validate(custom(function = "validate_date_format"))]
    pub to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_date_time_validation() {
        let req = CreateReservationRequest {
            guest_name: "홍길동".to_string(),
            guest_phone: None,
            party_size: 4,
            date: "2026-08-15".to_string(),
            time: "18:30".to_string(),
            duration_minutes: Some(90),
            table_label: Some("T1".to_string()),
            notes: None,
        };
        assert!(req.validate().is_ok());

        let bad_date = CreateReservationRequest {
            date: "15/08/2026".to_string(),
            ..req
        };
        assert!(bad_date.validate().is_err());
    }
}
