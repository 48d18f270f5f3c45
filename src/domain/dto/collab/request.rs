//! 협업 세션 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 협업 세션 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[validate(length(min = 1, max = 100, message = "세션 제목은 1-100자 사이여야 합니다"))]
    pub title: String,

    /// 에디터 언어 힌트. 생략 시 "plaintext".
    pub language: Option<String>,
}

/// AI 어시스트 액션 태그
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiAction {
    Explain,
    Refactor,
    Debug,
    Complete,
}

impl AiAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiAction::Explain => "explain",
            AiAction::Refactor => "refactor",
            AiAction::Debug => "debug",
            AiAction::Complete => "complete",
        }
    }
}

/// AI 어시스트 요청
///
/// 세션 코드로 대상 세션을 지정하며, 응답은 세션 채팅 기록에도 추가됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct AiAssistRequest {
    #[validate(length(min = 1, message = "세션 코드가 필요합니다"))]
    pub session_code: String,

    pub action: AiAction,

    #[validate(length(min = 1, max = 20000, message = "코드 선택 영역은 1-20000자 사이여야 합니다"))]
    pub code: String,

    pub language: Option<String>,
}

/// 번역 요청. 세션과 무관하게 동작합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(length(min = 1, max = 10000, message = "번역할 텍스트는 1-10000자 사이여야 합니다"))]
    pub text: String,

    #[validate(length(min = 2, max = 32, message = "대상 언어를 지정해주세요"))]
    pub target_language: String,
}
