//! # 예약 리포지토리 구현
//!
//! 예약 문서의 데이터 액세스 계층입니다.
//! 하루 단위 뷰가 주 조회 패턴이므로 (owner_id, date, time) 복합 인덱스를
//! 사용하고, 테이블 겹침 검사는 같은 날짜의 후보를 읽어 서비스 계층의
//! 엔티티 로직으로 판정합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::reservations::reservation::Reservation,
};

/// 예약 데이터 액세스 리포지토리
#[repository(name = "reservation", collection = "reservations")]
pub struct ReservationRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
}

impl ReservationRepository {
    /// ID로 예약을 조회합니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<Reservation>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자의 특정 날짜 예약 목록을 시간 순으로 반환합니다.
    pub async fn list_by_date(&self, owner_id: &str, date: &str) -> Result<Vec<Reservation>, AppError> {
        let cursor = self.collection::<Reservation>()
            .find(doc! { "owner_id": owner_id, "date": date })
            .sort(doc! { "time": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자의 날짜 범위 [from, to] 예약 목록을 반환합니다.
    ///
    /// 날짜가 "YYYY-MM-DD" 고정 폭 문자열이므로 사전순 비교가 날짜순과 같다.
    pub async fn list_by_date_range(
        &self,
        owner_id: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<Reservation>, AppError> {
        let cursor = self.collection::<Reservation>()
            .find(doc! {
                "owner_id": owner_id,
                "date": { "$gte": from, "$lte": to },
            })
            .sort(doc! { "date": 1, "time": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 예약을 저장합니다. 겹침 검사는 서비스 계층에서 선행됩니다.
    pub async fn create(&self, mut reservation: Reservation) -> Result<Reservation, AppError> {
        let result = self.collection::<Reservation>()
            .insert_one(&reservation)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        reservation.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("생성된 예약 ID를 확인할 수 없습니다".to_string())
        })?);

        Ok(reservation)
    }

    /// 예약을 부분 업데이트하고 최신 문서를 반환합니다.
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<Reservation>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Reservation>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 예약을 영구 삭제합니다. 삭제 여부를 반환합니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Reservation>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 예약 컬렉션 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Reservation>();

        let day_view_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "date": 1, "time": 1 })
            .options(IndexOptions::builder()
                .name("owner_date_time".to_string())
                .build())
            .build();

        collection
            .create_indexes([day_view_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
