//! # Google OAuth 2.0 인증 서비스
//!
//! Authorization code 플로우를 처리합니다.
//! 로그인 URL 생성(CSRF state 포함), code → 토큰 교환, 프로필 조회,
//! 기존 계정 연동 또는 신규 계정 생성을 담당합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    config::{AuthProvider, GoogleOAuthConfig, OAuthConfig},
    core::errors::AppError,
    domain::dto::users::response::google_oauth_response::{GoogleTokenResponse, OAuthLoginUrlResponse},
    domain::entities::users::user::User,
    domain::models::oauth::google_oauth_model::google_user::GoogleUserInfo,
    repositories::users::user_repo::UserRepository,
};

/// Google OAuth 인증 서비스
#[service(name = "googleauth")]
pub struct GoogleAuthService {
    /// 사용자 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl GoogleAuthService {
    /// CSRF state가 포함된 Google 로그인 URL을 생성합니다.
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = self.generate_oauth_state()?;

        let params = [
            ("client_id", GoogleOAuthConfig::client_id()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("scope", "openid email profile".to_string()),
            ("response_type", "code".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", GoogleOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// Authorization code를 검증/교환하고 사용자를 반환합니다.
    ///
    /// 같은 이메일의 로컬 계정이 있으면 계정 연동 대신 `ConflictError`를
    /// 반환합니다.
    pub async fn authenticate_with_code(&self, auth_code: &str, state: &str) -> Result<User, AppError> {
        // 1. State 검증
        self.verify_oauth_state(state)?;

        // 2. Authorization code로 액세스 토큰 교환
        let token_response = self.exchange_code_for_token(auth_code).await?;

        // 3. 액세스 토큰으로 사용자 정보 조회
        let google_user = self.get_user_info(&token_response.access_token).await?;

        // 4. 이메일로 기존 사용자 확인
        match self.user_repo.find_by_email(&google_user.email).await? {
            Some(existing_user) => {
                match existing_user.auth_provider {
                    AuthProvider::Google => {
                        log::info!("Google 사용자 로그인: {}", google_user.email);
                        Ok(existing_user)
                    },
                    AuthProvider::Local => {
                        Err(AppError::ConflictError(
                            "이미 해당 이메일로 등록된 로컬 계정이 있습니다. 로컬 로그인을 사용하거나 계정을 연동해주세요.".to_string()
                        ))
                    },
                    _ => {
                        Err(AppError::ConflictError(
                            "이미 해당 이메일로 다른 OAuth 프로바이더에 등록된 계정이 있습니다.".to_string()
                        ))
                    }
                }
            },
            None => {
                log::info!("새 Google 사용자 등록: {}", google_user.email);
                self.create_google_user(google_user).await
            }
        }
    }

    /// Authorization code를 Google 토큰 엔드포인트에서 교환합니다.
    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<GoogleTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("code", auth_code),
            ("client_id", &GoogleOAuthConfig::client_id()),
            ("client_secret", &GoogleOAuthConfig::client_secret()),
            ("redirect_uri", &GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code"),
        ];

        let response = client
            .post(&GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// 액세스 토큰으로 Google 프로필을 조회합니다.
    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get("https://www.googleapis.com/oauth2/v2/userinfo")
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }

    /// Google 프로필로 새 사용자를 생성합니다.
    async fn create_google_user(&self, google_user: GoogleUserInfo) -> Result<User, AppError> {
        let username = self.generate_unique_username(&google_user.given_name).await?;

        let user = User::new_oauth(
            google_user.email,
            username,
            google_user.name,
            AuthProvider::Google,
            google_user.id,
            google_user.picture,
        );

        self.user_repo.create(user).await
    }

    /// 프로필 이름에서 중복 없는 사용자명을 만듭니다.
    async fn generate_unique_username(&self, base_name: &str) -> Result<String, AppError> {
        let base = base_name.to_lowercase().replace(' ', "_");
        let mut username = base.clone();
        let mut counter = 1;

        loop {
            match self.user_repo.find_by_username(&username).await? {
                None => return Ok(username),
                Some(_) => {
                    username = format!("{}_{}", base, counter);
                    counter += 1;

                    if counter > 1000 {
                        return Err(AppError::InternalError("사용자명 생성 실패".to_string()));
                    }
                }
            }
        }
    }

    fn generate_oauth_state(&self) -> Result<String, AppError> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::InternalError(format!("시간 계산 실패: {}", e)))?
            .as_secs();

        let state_data = format!("{}:{}", timestamp, OAuthConfig::state_secret());

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        state_data.hash(&mut hasher);

        Ok(format!("{:x}", hasher.finish()))
    }

    // TODO: state를 Redis에 TTL과 함께 저장하고 콜백에서 일치 검증으로 강화
    fn verify_oauth_state(&self, state: &str) -> Result<(), AppError> {
        if state.is_empty() {
            return Err(AppError::AuthenticationError("유효하지 않은 OAuth state".to_string()));
        }
        Ok(())
    }
}
