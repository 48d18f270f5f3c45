//! Reservation Entity Implementation
//!
//! 레스토랑 예약 관리의 예약 문서 모델입니다.
//! 날짜/시간은 매장 현지 기준의 "YYYY-MM-DD" / "HH:MM" 문자열로 저장하며,
//! 같은 테이블의 시간 겹침 검사를 엔티티 메서드로 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 예약 상태
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Seated,
    Completed,
    Cancelled,
    NoShow,
}

/// 예약 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유자(매장 운영자) 사용자 ID
    pub owner_id: String,
    pub guest_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    pub party_size: u32,
    /// 예약 날짜 "YYYY-MM-DD"
    pub date: String,
    /// 예약 시작 시간 "HH:MM"
    pub time: String,
    /// 점유 시간 (분)
    pub duration_minutes: u32,
    /// 배정 테이블. 없으면 겹침 검사 대상이 아니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_label: Option<String>,
    pub status: ReservationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// "HH:MM" 문자열을 자정 기준 분으로 변환합니다.
fn minutes_of_day(time: &str) -> Option<u32> {
    let (h, m) = time.split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;

    if h > 23 || m > 59 {
        return None;
    }

    Some(h * 60 + m)
}

/// "YYYY-MM-DD" 형식 검증
pub fn is_valid_date(date: &str) -> bool {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// "HH:MM" 형식 검증
pub fn is_valid_time(time: &str) -> bool {
    minutes_of_day(time).is_some()
}

impl Reservation {
    pub fn new(
        owner_id: String,
        guest_name: String,
        party_size: u32,
        date: String,
        time: String,
        duration_minutes: u32,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            owner_id,
            guest_name,
            guest_phone: None,
            party_size,
            date,
            time,
            duration_minutes,
            table_label: None,
            status: ReservationStatus::Confirmed,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 해당 사용자가 소유자인지 확인
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }

    /// 취소/노쇼 예약은 테이블을 점유하지 않는다.
    pub fn occupies_table(&self) -> bool {
        !matches!(
            self.status,
            ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }

    /// 다른 예약과 같은 테이블에서 시간이 겹치는지 검사합니다.
    ///
    /// 겹침 조건: 같은 날짜, 같은 테이블 라벨, [time, time+duration)
    /// 구간의 교집합 존재. 테이블이 배정되지 않은 예약은 겹치지 않습니다.
    pub fn conflicts_with(&self, other: &Reservation) -> bool {
        if !self.occupies_table() || !other.occupies_table() {
            return false;
        }

        if self.date != other.date {
            return false;
        }

        let (Some(self_table), Some(other_table)) = (&self.table_label, &other.table_label) else {
            return false;
        };
        if self_table != other_table {
            return false;
        }

        let (Some(self_start), Some(other_start)) =
            (minutes_of_day(&self.time), minutes_of_day(&other.time))
        else {
            return false;
        };

        let self_end = self_start + self.duration_minutes;
        let other_end = other_start + other.duration_minutes;

        self_start < other_end && other_start < self_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(date: &str, time: &str, duration: u32, table: Option<&str>) -> Reservation {
        let mut r = Reservation::new(
            "owner-1".to_string(),
            "홍길동".to_string(),
            4,
            date.to_string(),
            time.to_string(),
            duration,
        );
        r.table_label = table.map(|t| t.to_string());
        r
    }

    #[test]
    fn test_overlapping_windows_on_same_table_conflict() {
        let a = reservation("2026-08-15", "18:00", 90, Some("T1"));
        let b = reservation("2026-08-15", "19:00", 90, Some("T1"));

        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn test_adjacent_windows_do_not_conflict() {
        // [18:00, 19:30) 와 [19:30, 21:00) 은 경계만 공유한다
        let a = reservation("2026-08-15", "18:00", 90, Some("T1"));
        let b = reservation("2026-08-15", "19:30", 90, Some("T1"));

        assert!(!a.conflicts_with(&b));
        assert!(!b.conflicts_with(&a));
    }

    #[test]
    fn test_different_table_or_date_does_not_conflict() {
        let a = reservation("2026-08-15", "18:00", 90, Some("T1"));
        let b = reservation("2026-08-15", "18:30", 90, Some("T2"));
        let c = reservation("2026-08-16", "18:00", 90, Some("T1"));

        assert!(!a.conflicts_with(&b));
        assert!(!a.conflicts_with(&c));
    }

    #[test]
    fn test_unassigned_table_never_conflicts() {
        let a = reservation("2026-08-15", "18:00", 90, None);
        let b = reservation("2026-08-15", "18:00", 90, Some("T1"));

        assert!(!a.conflicts_with(&b));
        assert!(!b.conflicts_with(&a));
    }

    #[test]
    fn test_cancelled_reservation_releases_table() {
        let a = reservation("2026-08-15", "18:00", 90, Some("T1"));
        let mut b = reservation("2026-08-15", "18:30", 90, Some("T1"));
        b.status = ReservationStatus::Cancelled;

        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn test_date_and_time_validation() {
        assert!(is_valid_date("2026-08-15"));
        assert!(!is_valid_date("2026-13-01"));
        assert!(!is_valid_date("15-08-2026"));

        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("18:60"));
        assert!(!is_valid_time("1800"));
    }
}
