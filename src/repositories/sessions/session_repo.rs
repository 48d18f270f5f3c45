//! # 협업 세션 리포지토리 구현
//!
//! 협업 세션 문서의 데이터 액세스 계층입니다.
//! 릴레이(참가자 join)와 AI 어시스트(채팅 append)가 동시에 문서를 변경하므로
//! 부분 갱신은 전부 단일 원자 연산(`$push` / `$addToSet`)으로 수행합니다.
//! 트랜잭션이나 순서 보장은 제공하지 않습니다.
//!
//! ## 인덱스
//!
//! session_code(unique), participants.user_id + updated_at(desc)

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, to_bson}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    config::CollabConfig,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::collab::session::{ChatEntry, CollabSession, Participant},
};

/// 협업 세션 데이터 액세스 리포지토리
#[repository(name = "session", collection = "collab_sessions")]
pub struct SessionRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
}

impl SessionRepository {
    /// ID로 세션을 조회합니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<CollabSession>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<CollabSession>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 세션 코드로 세션을 조회합니다. 릴레이와 AI 브리지의 주 조회 경로입니다.
    pub async fn find_by_code(&self, session_code: &str) -> Result<Option<CollabSession>, AppError> {
        self.collection::<CollabSession>()
            .find_one(doc! { "session_code": session_code })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자가 참가자로 포함된 세션 목록을 최근 활동 순으로 반환합니다.
    pub async fn list_by_participant(&self, user_id: &str) -> Result<Vec<CollabSession>, AppError> {
        let cursor = self.collection::<CollabSession>()
            .find(doc! { "participants.user_id": user_id })
            .sort(doc! { "updated_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 세션을 저장합니다. 세션 코드 중복은 호출 전에 해소되어 있어야 합니다.
    pub async fn create(&self, mut session: CollabSession) -> Result<CollabSession, AppError> {
        let result = self.collection::<CollabSession>()
            .insert_one(&session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        session.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("생성된 세션 ID를 확인할 수 없습니다".to_string())
        })?);

        Ok(session)
    }

    /// 참가자를 추가합니다. 이미 참가한 사용자는 중복 추가되지 않습니다.
    ///
    /// 같은 사용자가 두 소켓에서 동시에 join해도 participants 배열에는
    /// 한 번만 들어가도록 user_id 부재 조건을 필터에 포함한 단일
    /// `$push` 연산으로 처리합니다.
    pub async fn add_participant(&self, session_code: &str, participant: &Participant) -> Result<(), AppError> {
        let participant_bson = to_bson(participant)
            .map_err(|e| AppError::InternalError(format!("참가자 직렬화 실패: {}", e)))?;

        self.collection::<CollabSession>()
            .update_one(
                doc! {
                    "session_code": session_code,
                    "participants.user_id": { "$ne": &participant.user_id },
                },
                doc! {
                    "$push": { "participants": participant_bson },
                    "$currentDate": { "updated_at": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 채팅 항목을 기록에 추가합니다.
    ///
    /// `$slice`로 기록 길이를 설정 한도 내로 유지합니다 (오래된 항목부터 제거).
    pub async fn push_chat_entry(&self, session_code: &str, entry: &ChatEntry) -> Result<(), AppError> {
        let entry_bson = to_bson(entry)
            .map_err(|e| AppError::InternalError(format!("채팅 항목 직렬화 실패: {}", e)))?;

        let history_limit = CollabConfig::chat_history_limit();

        let result = self.collection::<CollabSession>()
            .update_one(
                doc! { "session_code": session_code },
                doc! {
                    "$push": {
                        "chat_history": {
                            "$each": [entry_bson],
                            "$slice": -history_limit,
                        }
                    },
                    "$currentDate": { "updated_at": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("세션을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 세션을 비활성화합니다 (종료). 성공 여부를 반환합니다.
    pub async fn close(&self, session_code: &str) -> Result<bool, AppError> {
        let result = self.collection::<CollabSession>()
            .update_one(
                doc! { "session_code": session_code },
                doc! {
                    "$set": { "active": false },
                    "$currentDate": { "updated_at": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    /// 세션을 영구 삭제합니다. 삭제 여부를 반환합니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<CollabSession>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 협업 세션 컬렉션 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<CollabSession>();

        let code_index = IndexModel::builder()
            .keys(doc! { "session_code": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("session_code_unique".to_string())
                .build())
            .build();

        let participant_index = IndexModel::builder()
            .keys(doc! { "participants.user_id": 1, "updated_at": -1 })
            .options(IndexOptions::builder()
                .name("participant_updated_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([code_index, participant_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
