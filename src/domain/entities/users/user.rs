//! User Entity Implementation
//!
//! 워크스페이스 대시보드 사용자 엔티티입니다.
//! 로컬 인증과 OAuth 인증을 모두 지원하는 통합된 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::models::oauth::google_oauth_model::oauth_provider::OAuthData;

/// 사용자 엔티티
///
/// 모든 워크스페이스 리소스(웹사이트, 지원 내역, 예약, 협업 세션)의
/// 소유자가 되는 핵심 도메인 엔티티입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 표시 이름
    pub display_name: String,
    /// 해시된 비밀번호 (OAuth 사용자의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// OAuth 관련 추가 데이터 (로컬 인증 사용자의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_data: Option<OAuthData>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 이메일 인증 여부 (OAuth 사용자는 기본적으로 true)
    pub is_email_verified: bool,
    /// 사용자 역할
    pub roles: Vec<String>,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    ///
    /// 이메일 인증이 필요한 상태로 시작됩니다.
    pub fn new_local(email: String, username: String, display_name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            display_name,
            password_hash: Some(password_hash),
            auth_provider: AuthProvider::Local,
            oauth_data: None,
            is_active: true,
            is_email_verified: false, // 로컬 사용자는 이메일 인증 필요
            roles: vec!["user".to_string()],
            profile_image_url: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 OAuth 사용자 생성
    ///
    /// 프로바이더에서 이미 이메일을 검증했으므로 인증 완료 상태로 시작됩니다.
    pub fn new_oauth(
        email: String,
        username: String,
        display_name: String,
        auth_provider: AuthProvider,
        provider_user_id: String,
        provider_profile_image: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        let oauth_data = OAuthData {
            provider_user_id,
            provider_profile_image: provider_profile_image.clone(),
            provider_data: None,
        };

        Self {
            id: None,
            email,
            username,
            display_name,
            password_hash: None, // OAuth 사용자는 비밀번호 없음
            auth_provider,
            oauth_data: Some(oauth_data),
            is_active: true,
            is_email_verified: true,
            roles: vec!["user".to_string()],
            profile_image_url: provider_profile_image,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 로컬 인증 사용자인지 확인
    pub fn is_local_auth(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Local)
    }

    /// OAuth 인증 사용자인지 확인
    pub fn is_oauth_auth(&self) -> bool {
        !self.is_local_auth()
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local_auth() && self.password_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_user_requires_email_verification() {
        let user = User::new_local(
            "dev@example.com".to_string(),
            "dev_user".to_string(),
            "개발자".to_string(),
            "hashed".to_string(),
        );

        assert!(user.is_local_auth());
        assert!(!user.is_email_verified);
        assert!(user.can_authenticate_with_password());
    }

    #[test]
    fn test_oauth_user_cannot_use_password_auth() {
        let user = User::new_oauth(
            "dev@example.com".to_string(),
            "dev_user".to_string(),
            "개발자".to_string(),
            AuthProvider::Google,
            "google-123".to_string(),
            None,
        );

        assert!(user.is_oauth_auth());
        assert!(user.is_email_verified);
        assert!(!user.can_authenticate_with_password());
    }
}
