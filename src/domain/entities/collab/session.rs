//! Collab Session Entity Implementation
//!
//! 실시간 페어 프로그래밍 협업 세션 문서 모델입니다.
//! 세션 메타데이터, 참가자 목록, 채팅 기록을 보관하며
//! 릴레이(참가자 join)와 AI 어시스트 핸들러(채팅 append)가 함께 변경합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 세션 참가자
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    pub display_name: String,
    pub joined_at: DateTime,
}

/// 채팅 기록의 AI 응답 작성자 식별자
pub const ASSISTANT_AUTHOR: &str = "assistant";

/// 세션 채팅 기록 항목
///
/// `author`는 사용자 ID 또는 [`ASSISTANT_AUTHOR`]입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEntry {
    pub author: String,
    pub display_name: String,
    pub body: String,
    pub sent_at: DateTime,
}

impl ChatEntry {
    pub fn from_user(user_id: &str, display_name: &str, body: String) -> Self {
        Self {
            author: user_id.to_string(),
            display_name: display_name.to_string(),
            body,
            sent_at: DateTime::now(),
        }
    }

    pub fn from_assistant(body: String) -> Self {
        Self {
            author: ASSISTANT_AUTHOR.to_string(),
            display_name: "AI".to_string(),
            body,
            sent_at: DateTime::now(),
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.author == ASSISTANT_AUTHOR
    }
}

/// 협업 세션 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollabSession {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 참가용 짧은 코드 (unique). 릴레이의 룸 이름으로도 사용된다.
    pub session_code: String,
    /// 세션을 만든 사용자 ID
    pub host_id: String,
    pub title: String,
    /// 에디터 언어 힌트 ("rust", "typescript" 등)
    pub language: String,
    pub participants: Vec<Participant>,
    pub chat_history: Vec<ChatEntry>,
    /// 종료된 세션은 false. 종료 후에도 기록 조회는 가능하다.
    pub active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl CollabSession {
    /// 호스트를 첫 참가자로 포함한 새 세션을 생성합니다.
    pub fn new(
        session_code: String,
        host_id: String,
        host_display_name: String,
        title: String,
        language: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            session_code,
            host_id: host_id.clone(),
            title,
            language,
            participants: vec![Participant {
                user_id: host_id,
                display_name: host_display_name,
                joined_at: now,
            }],
            chat_history: Vec::new(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_hosted_by(&self, user_id: &str) -> bool {
        self.host_id == user_id
    }

    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_includes_host_as_participant() {
        let session = CollabSession::new(
            "a1b2c3d4".to_string(),
            "host-1".to_string(),
            "호스트".to_string(),
            "리팩터링 세션".to_string(),
            "rust".to_string(),
        );

        assert!(session.active);
        assert!(session.is_hosted_by("host-1"));
        assert!(session.has_participant("host-1"));
        assert!(!session.has_participant("guest-1"));
        assert!(session.chat_history.is_empty());
    }

    #[test]
    fn test_chat_entry_authors() {
        let user_entry = ChatEntry::from_user("user-1", "게스트", "안녕하세요".to_string());
        let ai_entry = ChatEntry::from_assistant("이 함수는 재귀로 트리를 순회합니다".to_string());

        assert!(!user_entry.is_assistant());
        assert_eq!(user_entry.author, "user-1");
        assert!(ai_entry.is_assistant());
        assert_eq!(ai_entry.author, ASSISTANT_AUTHOR);
    }
}
