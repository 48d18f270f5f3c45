//! # 협업 세션 서비스 구현
//!
//! 협업 세션 문서의 비즈니스 로직입니다.
//! 세션 코드 발급, 참가자 등록, 채팅 기록 반영, 세션 종료를 담당합니다.
//! 릴레이 이벤트 전달 자체는 룸 레지스트리의 몫이고, 이 서비스는
//! 세션 문서에 남는 상태만 다룹니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    config::CollabConfig,
    core::errors::AppError,
    domain::dto::collab::request::CreateSessionRequest,
    domain::entities::collab::session::{ChatEntry, CollabSession, Participant},
    repositories::sessions::session_repo::SessionRepository,
    repositories::users::user_repo::UserRepository,
    utils::string_utils::generate_session_code,
};

/// 협업 세션 비즈니스 로직 서비스
#[service(name = "session")]
pub struct SessionService {
    /// 세션 리포지토리 (자동 주입)
    session_repo: Arc<SessionRepository>,
    /// 사용자 리포지토리 (자동 주입) - 참가자 표시 이름 조회용
    user_repo: Arc<UserRepository>,
}

impl SessionService {
    /// 새 협업 세션을 생성합니다. 호스트가 첫 참가자가 됩니다.
    pub async fn create_session(&self, host_id: &str, request: CreateSessionRequest) -> Result<CollabSession, AppError> {
        let host = self.user_repo
            .find_by_id(host_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let session_code = self.generate_unique_code().await?;

        let session = CollabSession::new(
            session_code,
            host_id.to_string(),
            host.display_name,
            request.title,
            request.language.unwrap_or_else(|| "plaintext".to_string()),
        );

        self.session_repo.create(session).await
    }

    /// ID로 세션을 조회합니다. 참가자만 접근할 수 있습니다.
    pub async fn get_session(&self, user_id: &str, id: &str) -> Result<CollabSession, AppError> {
        let session = self.session_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("세션을 찾을 수 없습니다".to_string()))?;

        if !session.has_participant(user_id) {
            return Err(AppError::AuthorizationError("세션 참가자가 아닙니다".to_string()));
        }

        Ok(session)
    }

    /// 세션 코드로 세션을 조회합니다.
    ///
    /// 코드 자체가 초대장 역할을 하므로 참가자 검사는 하지 않습니다.
    pub async fn get_session_by_code(&self, session_code: &str) -> Result<CollabSession, AppError> {
        self.session_repo
            .find_by_code(session_code)
            .await?
            .ok_or_else(|| AppError::NotFound("세션을 찾을 수 없습니다".to_string()))
    }

    /// 사용자가 참가한 세션 목록을 반환합니다.
    pub async fn list_sessions(&self, user_id: &str) -> Result<Vec<CollabSession>, AppError> {
        self.session_repo.list_by_participant(user_id).await
    }

    /// 사용자를 세션 참가자로 등록하고 세션을 반환합니다.
    ///
    /// 릴레이의 `join-session` 처리에서 호출됩니다. 같은 사용자의 반복
    /// join은 멱등합니다. 종료된 세션에는 참가할 수 없습니다.
    pub async fn join_session(&self, session_code: &str, user_id: &str) -> Result<CollabSession, AppError> {
        let session = self.get_session_by_code(session_code).await?;

        if !session.active {
            return Err(AppError::ConflictError("종료된 세션입니다".to_string()));
        }

        let user = self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let participant = Participant {
            user_id: user_id.to_string(),
            display_name: user.display_name,
            joined_at: mongodb::bson::DateTime::now(),
        };

        self.session_repo.add_participant(session_code, &participant).await?;

        self.get_session_by_code(session_code).await
    }

    /// 사용자 채팅 메시지를 세션 기록에 추가합니다.
    ///
    /// 릴레이의 `chat-message` 처리에서 호출됩니다. 본문은 릴레이가
    /// payload에서 추출한 텍스트입니다.
    pub async fn append_user_chat(
        &self,
        session_code: &str,
        user_id: &str,
        display_name: &str,
        body: String,
    ) -> Result<(), AppError> {
        let entry = ChatEntry::from_user(user_id, display_name, body);
        self.session_repo.push_chat_entry(session_code, &entry).await
    }

    /// 세션을 종료합니다 (active=false). 호스트만 가능합니다.
    pub async fn close_session(&self, user_id: &str, session_code: &str) -> Result<(), AppError> {
        let session = self.get_session_by_code(session_code).await?;

        if !session.is_hosted_by(user_id) {
            return Err(AppError::AuthorizationError("호스트만 세션을 종료할 수 있습니다".to_string()));
        }

        let closed = self.session_repo.close(session_code).await?;
        if !closed {
            return Err(AppError::NotFound("세션을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 세션을 영구 삭제합니다. 호스트만 가능합니다.
    pub async fn delete_session(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        let session = self.session_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("세션을 찾을 수 없습니다".to_string()))?;

        if !session.is_hosted_by(user_id) {
            return Err(AppError::AuthorizationError("호스트만 세션을 삭제할 수 있습니다".to_string()));
        }

        let deleted = self.session_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("세션을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 중복 없는 세션 코드를 만듭니다.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        let length = CollabConfig::session_code_length();

        for _ in 0..16 {
            let code = generate_session_code(length);
            if self.session_repo.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::InternalError("세션 코드 생성 실패".to_string()))
    }
}
