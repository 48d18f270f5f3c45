//! 외부 연동 및 협업 릴레이 설정
//!
//! 생성형 AI 브리지, 미디어 업로드 서명, 협업 세션 룸의 설정값을
//! 환경 변수에서 읽어옵니다. `auth_config`와 동일한 구조를 따릅니다.

use std::env;

/// 생성형 AI 브리지 설정
///
/// 엔드포인트는 OpenAI 호환 chat-completion JSON을 가정합니다.
/// 제공자별 계약의 세부 사항은 이 서비스의 책임이 아니므로
/// URL/모델/키만 설정으로 분리합니다.
pub struct AiConfig;

impl AiConfig {
    pub fn api_key() -> String {
        env::var("GENAI_API_KEY")
            .expect("GENAI_API_KEY must be set")
    }

    pub fn endpoint() -> String {
        env::var("GENAI_ENDPOINT")
            .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string())
    }

    pub fn model() -> String {
        env::var("GENAI_MODEL")
            .unwrap_or_else(|_| "gpt-4o-mini".to_string())
    }

    /// 업스트림 응답 대기 제한 (초)
    pub fn request_timeout_secs() -> u64 {
        env::var("GENAI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }
}

/// 미디어 CDN 직접 업로드 서명 설정
///
/// 파일 바이트는 이 서버를 거치지 않고, 서명된 업로드 파라미터만 발급합니다.
pub struct MediaConfig;

impl MediaConfig {
    pub fn cloud_name() -> String {
        env::var("MEDIA_CLOUD_NAME")
            .expect("MEDIA_CLOUD_NAME must be set")
    }

    pub fn api_key() -> String {
        env::var("MEDIA_API_KEY")
            .expect("MEDIA_API_KEY must be set")
    }

    pub fn api_secret() -> String {
        env::var("MEDIA_API_SECRET")
            .expect("MEDIA_API_SECRET must be set")
    }
}

/// 협업 세션 룸 설정
pub struct CollabConfig;

impl CollabConfig {
    /// 룸당 최대 동시 접속 수
    pub fn max_room_participants() -> usize {
        env::var("COLLAB_MAX_PARTICIPANTS")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .unwrap_or(8)
    }

    /// 세션 문서에 보존하는 채팅 기록 최대 개수
    pub fn chat_history_limit() -> i64 {
        env::var("COLLAB_CHAT_HISTORY_LIMIT")
            .unwrap_or_else(|_| "500".to_string())
            .parse()
            .unwrap_or(500)
    }

    /// 세션 코드 길이
    pub fn session_code_length() -> usize {
        env::var("COLLAB_SESSION_CODE_LENGTH")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .unwrap_or(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        if env::var("GENAI_ENDPOINT").is_err() {
            assert!(AiConfig::endpoint().starts_with("https://"));
        }
        if env::var("GENAI_TIMEOUT_SECS").is_err() {
            assert_eq!(AiConfig::request_timeout_secs(), 30);
        }
    }

    #[test]
    fn test_collab_config_defaults() {
        if env::var("COLLAB_MAX_PARTICIPANTS").is_err() {
            assert_eq!(CollabConfig::max_room_participants(), 8);
        }
        if env::var("COLLAB_CHAT_HISTORY_LIMIT").is_err() {
            assert_eq!(CollabConfig::chat_history_limit(), 500);
        }
        if env::var("COLLAB_SESSION_CODE_LENGTH").is_err() {
            assert_eq!(CollabConfig::session_code_length(), 8);
        }
    }
}
