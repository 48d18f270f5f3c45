//! 예약 관리 응답 DTO

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::reservations::reservation::{Reservation, ReservationStatus};

/// 예약 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: String,
    pub guest_name: String,
    pub guest_phone: Option<String>,
    pub party_size: u32,
    pub date: String,
    pub time: String,
    pub duration_minutes: u32,
    pub table_label: Option<String>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id.map(|id| id.to_hex()).unwrap_or_default(),
            guest_name: r.guest_name,
            guest_phone: r.guest_phone,
            party_size: r.party_size,
            date: r.date,
            time: r.time,
            duration_minutes: r.duration_minutes,
            table_label: r.table_label,
            status: r.status,
            notes: r.notes,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
