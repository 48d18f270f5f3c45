//! 협업 릴레이 이벤트 모델
//!
//! 클라이언트와 주고받는 WebSocket JSON 봉투입니다.
//! 여섯 가지 이벤트(`join-session`, `code-change`, `cursor-move`,
//! `chat-message`, `webrtc-offer`, `webrtc-answer`, `webrtc-ice-candidate`)를
//! `event` 태그로 구분하며, `payload`는 서버가 해석하지 않는 불투명 JSON입니다.
//!
//! 릴레이는 수신한 원본 텍스트를 그대로 룸의 다른 참가자에게 전달합니다.
//! 병합, 충돌 해소, 순서 보장은 하지 않습니다. 예외는 `join-session`으로,
//! 액세스 토큰이 포함되어 있어 원본 대신 서버가 만든 `peer-joined` 알림을
//! 브로드캐스트합니다.

use serde::{Deserialize, Serialize};

/// 클라이언트 → 서버 이벤트 봉투
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// 룸 참가. 릴레이 등록과 세션 문서의 참가자 추가를 수행한다.
    JoinSession {
        session_code: String,
        /// REST 로그인에서 발급받은 JWT 액세스 토큰
        access_token: String,
    },
    CodeChange {
        session_code: String,
        payload: serde_json::Value,
    },
    CursorMove {
        session_code: String,
        payload: serde_json::Value,
    },
    ChatMessage {
        session_code: String,
        payload: serde_json::Value,
    },
    WebrtcOffer {
        session_code: String,
        payload: serde_json::Value,
    },
    WebrtcAnswer {
        session_code: String,
        payload: serde_json::Value,
    },
    WebrtcIceCandidate {
        session_code: String,
        payload: serde_json::Value,
    },
}

impl ClientEvent {
    /// 이벤트가 향하는 룸(세션 코드)
    pub fn session_code(&self) -> &str {
        match self {
            ClientEvent::JoinSession { session_code, .. }
            | ClientEvent::CodeChange { session_code, .. }
            | ClientEvent::CursorMove { session_code, .. }
            | ClientEvent::ChatMessage { session_code, .. }
            | ClientEvent::WebrtcOffer { session_code, .. }
            | ClientEvent::WebrtcAnswer { session_code, .. }
            | ClientEvent::WebrtcIceCandidate { session_code, .. } => session_code,
        }
    }

    /// 룸 참가 없이도 받아줄 수 있는 이벤트인지 (join만 해당)
    pub fn is_join(&self) -> bool {
        matches!(self, ClientEvent::JoinSession { .. })
    }
}

/// 서버 → 클라이언트 이벤트 봉투
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// join 성공 응답 (요청한 소켓에만 전송)
    SessionJoined {
        session_code: String,
        participant_count: usize,
    },
    /// 다른 참가자의 입장 알림 (join-session 원본 대신 브로드캐스트)
    PeerJoined {
        session_code: String,
        user_id: String,
        display_name: String,
    },
    Error {
        message: String,
    },
}

impl ServerEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{\"event\":\"error\",\"message\":\"serialization failed\"}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tags_use_kebab_case() {
        let raw = r#"{"event":"code-change","session_code":"a1b2c3d4","payload":{"delta":"fn main"}}"#;
        let event: ClientEvent = serde_json::from_str(raw).unwrap();

        assert!(matches!(event, ClientEvent::CodeChange { .. }));
        assert_eq!(event.session_code(), "a1b2c3d4");

        let raw = r#"{"event":"webrtc-ice-candidate","session_code":"a1b2c3d4","payload":{"candidate":"..."}}"#;
        let event: ClientEvent = serde_json::from_str(raw).unwrap();
        assert!(matches!(event, ClientEvent::WebrtcIceCandidate { .. }));
    }

    #[test]
    fn test_join_event_carries_token() {
        let raw = r#"{"event":"join-session","session_code":"a1b2c3d4","access_token":"eyJ..."}"#;
        let event: ClientEvent = serde_json::from_str(raw).unwrap();

        assert!(event.is_join());
        if let ClientEvent::JoinSession { access_token, .. } = event {
            assert_eq!(access_token, "eyJ...");
        } else {
            panic!("Expected JoinSession");
        }
    }

    #[test]
    fn test_payload_is_opaque() {
        // 서버가 모르는 payload 구조도 파싱에 실패하지 않아야 한다
        let raw = r#"{"event":"cursor-move","session_code":"s","payload":{"line":3,"col":7,"editor":{"pane":1}}}"#;
        let event: ClientEvent = serde_json::from_str(raw).unwrap();

        if let ClientEvent::CursorMove { payload, .. } = event {
            assert_eq!(payload["editor"]["pane"], 1);
        } else {
            panic!("Expected CursorMove");
        }
    }

    #[test]
    fn test_unknown_event_tag_is_rejected() {
        let raw = r#"{"event":"shutdown-server","session_code":"s","payload":{}}"#;
        assert!(serde_json::from_str::<ClientEvent>(raw).is_err());
    }

    #[test]
    fn test_server_event_serialization() {
        let event = ServerEvent::PeerJoined {
            session_code: "a1b2c3d4".to_string(),
            user_id: "user-1".to_string(),
            display_name: "게스트".to_string(),
        };

        let json: serde_json::Value = serde_json::from_str(&event.to_json()).unwrap();
        assert_eq!(json["event"], "peer-joined");
        assert_eq!(json["display_name"], "게스트");
    }
}
