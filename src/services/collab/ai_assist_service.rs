//! # AI 어시스트 브리지
//!
//! 코드 선택 영역과 액션 태그(explain/refactor/debug/complete)를 받아
//! 생성형 AI chat-completion 엔드포인트로 전달하고, 응답을 세션 채팅
//! 기록에 추가합니다. 번역 요청도 같은 브리지를 사용하되 세션을
//! 변경하지 않습니다.
//!
//! 업스트림 계약은 OpenAI 호환 JSON만 가정하며, 엔드포인트/모델/키는
//! [`AiConfig`]에서 옵니다. 스트리밍은 사용하지 않습니다.

use std::sync::Arc;
use std::time::Duration;
use serde::Deserialize;
use serde_json::json;
use singleton_macro::service;
use crate::{
    config::AiConfig,
    core::errors::AppError,
    domain::dto::collab::request::AiAction,
    domain::entities::collab::session::ChatEntry,
    repositories::sessions::session_repo::SessionRepository,
    repositories::users::user_repo::UserRepository,
};

/// chat-completion 응답에서 필요한 부분만 읽는 모델
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

/// 생성형 AI 브리지 서비스
#[service(name = "aiassist")]
pub struct AiAssistService {
    /// 세션 리포지토리 (자동 주입) - 채팅 기록 반영용
    session_repo: Arc<SessionRepository>,
    /// 사용자 리포지토리 (자동 주입) - 요청자 표시 이름 조회용
    user_repo: Arc<UserRepository>,
}

impl AiAssistService {
    /// 코드 어시스트 요청을 처리합니다.
    ///
    /// 1. 세션 참가자인지 확인
    /// 2. 액션별 프롬프트 구성 후 업스트림 호출
    /// 3. 성공 시에만 요청 요약과 응답을 세션 채팅 기록에 추가
    pub async fn assist(
        &self,
        user_id: &str,
        session_code: &str,
        action: AiAction,
        code: &str,
        language: Option<&str>,
    ) -> Result<String, AppError> {
        let session = self.session_repo
            .find_by_code(session_code)
            .await?
            .ok_or_else(|| AppError::NotFound("세션을 찾을 수 없습니다".to_string()))?;

        if !session.has_participant(user_id) {
            return Err(AppError::AuthorizationError("세션 참가자가 아닙니다".to_string()));
        }

        let language = language.unwrap_or(&session.language).to_string();
        let (system_prompt, user_prompt) = build_prompt(action, &language, code);

        let reply = self.call_completion(&system_prompt, &user_prompt).await?;

        // 업스트림 성공 후에만 세션 기록을 변경한다
        let display_name = self.user_repo
            .find_by_id(user_id)
            .await?
            .map(|u| u.display_name)
            .unwrap_or_else(|| "참가자".to_string());

        let request_summary = format!(
            "[AI {}] {}",
            action.as_str(),
            summarize_code(code),
        );

        self.session_repo
            .push_chat_entry(session_code, &ChatEntry::from_user(user_id, &display_name, request_summary))
            .await?;
        self.session_repo
            .push_chat_entry(session_code, &ChatEntry::from_assistant(reply.clone()))
            .await?;

        Ok(reply)
    }

    /// 텍스트를 대상 언어로 번역합니다. 세션과 무관하게 동작합니다.
    pub async fn translate(&self, text: &str, target_language: &str) -> Result<String, AppError> {
        let system_prompt = format!(
            "You are a translation engine. Translate the user's text into {}. \
             Reply with the translation only, no commentary.",
            target_language
        );

        self.call_completion(&system_prompt, text).await
    }

    /// chat-completion 엔드포인트를 호출하고 첫 응답 본문을 반환합니다.
    async fn call_completion(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(AiConfig::request_timeout_secs()))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        let body = json!({
            "model": AiConfig::model(),
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
        });

        let response = client
            .post(AiConfig::endpoint())
            .bearer_auth(AiConfig::api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("AI 엔드포인트 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "AI 엔드포인트 응답 실패: {}", error_text
            )));
        }

        let completion = response
            .json::<CompletionResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("AI 응답 파싱 실패: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::ExternalServiceError("AI 응답에 결과가 없습니다".to_string()))
    }
}

/// 액션별 (system, user) 프롬프트를 구성합니다.
fn build_prompt(action: AiAction, language: &str, code: &str) -> (String, String) {
    let instruction = match action {
        AiAction::Explain => "Explain what the following code does, step by step, in Korean.",
        AiAction::Refactor => "Refactor the following code for readability and idiomatic style. Reply with the refactored code followed by a short explanation in Korean.",
        AiAction::Debug => "Find likely bugs in the following code and explain how to fix them, in Korean.",
        AiAction::Complete => "Complete the following code naturally. Reply with the completed code only.",
    };

    let system_prompt = format!(
        "You are a pair-programming assistant embedded in a collaborative code editor. \
         The code is written in {}.",
        language
    );

    let user_prompt = format!("{}\n\n```{}\n{}\n```", instruction, language, code);

    (system_prompt, user_prompt)
}

/// 채팅 기록에 남길 코드 요약 (첫 줄 + 길이)
fn summarize_code(code: &str) -> String {
    let first_line = code.lines().next().unwrap_or("").trim();
    let mut summary: String = first_line.chars().take(60).collect();

    if first_line.chars().count() > 60 || code.lines().count() > 1 {
        summary.push('…');
    }

    format!("{} ({}자)", summary, code.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_language_and_code() {
        let (system, user) = build_prompt(AiAction::Explain, "rust", "fn main() {}");

        assert!(system.contains("rust"));
        assert!(user.contains("```rust"));
        assert!(user.contains("fn main() {}"));
        assert!(user.contains("Explain"));
    }

    #[test]
    fn test_build_prompt_varies_by_action() {
        let code = "let x = 1;";
        let (_, explain) = build_prompt(AiAction::Explain, "rust", code);
        let (_, refactor) = build_prompt(AiAction::Refactor, "rust", code);
        let (_, debug) = build_prompt(AiAction::Debug, "rust", code);
        let (_, complete) = build_prompt(AiAction::Complete, "rust", code);

        assert!(explain.contains("Explain"));
        assert!(refactor.contains("Refactor"));
        assert!(debug.contains("bugs"));
        assert!(complete.contains("Complete"));
    }

    #[test]
    fn test_summarize_code_truncates_long_first_line() {
        let long_line = "x".repeat(100);
        let summary = summarize_code(&long_line);

        assert!(summary.contains('…'));
        assert!(summary.contains("(100자)"));
    }

    #[test]
    fn test_summarize_code_short_single_line() {
        let summary = summarize_code("let x = 1;");
        assert_eq!(summary, "let x = 1; (10자)");
    }
}
