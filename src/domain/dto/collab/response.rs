//! 협업 세션 응답 DTO

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::collab::session::{ChatEntry, CollabSession, Participant};

/// 협업 세션 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub session_code: String,
    pub host_id: String,
    pub title: String,
    pub language: String,
    pub participants: Vec<Participant>,
    pub chat_history: Vec<ChatEntry>,
    pub active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<CollabSession> for SessionResponse {
    fn from(s: CollabSession) -> Self {
        Self {
            id: s.id.map(|id| id.to_hex()).unwrap_or_default(),
            session_code: s.session_code,
            host_id: s.host_id,
            title: s.title,
            language: s.language,
            participants: s.participants,
            chat_history: s.chat_history,
            active: s.active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// 목록 조회용 요약 응답 (채팅 기록 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummaryResponse {
    pub id: String,
    pub session_code: String,
    pub title: String,
    pub language: String,
    pub participant_count: usize,
    pub active: bool,
    pub updated_at: DateTime,
}

impl From<CollabSession> for SessionSummaryResponse {
    fn from(s: CollabSession) -> Self {
        Self {
            id: s.id.map(|id| id.to_hex()).unwrap_or_default(),
            session_code: s.session_code,
            title: s.title,
            language: s.language,
            participant_count: s.participants.len(),
            active: s.active,
            updated_at: s.updated_at,
        }
    }
}

/// AI 어시스트 응답
#[derive(Debug, Serialize)]
pub struct AiAssistResponse {
    pub action: String,
    pub reply: String,
}

/// 번역 응답
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub target_language: String,
    pub translated: String,
}
