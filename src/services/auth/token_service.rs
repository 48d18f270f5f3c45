//! # JWT 토큰 서비스
//!
//! HMAC-SHA256 서명 JWT의 생성/검증과 Redis 리프레시 토큰 세션을 담당합니다.
//! 액세스 토큰은 상태 없이 검증되고, 리프레시 토큰은 Redis 세션과
//! 대조하여 회전(rotation) 이후의 재사용을 차단합니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::entities::users::user::User,
    domain::models::token::{TokenClaims, TokenPair},
    repositories::tokens::token_repo::TokenRepository,
};

/// JWT 토큰 관리 서비스
#[service(name = "token")]
pub struct TokenService {
    /// 리프레시 토큰 세션 리포지토리 (자동 주입)
    token_repo: Arc<TokenRepository>,
}

impl TokenService {
    fn build_claims(user: &User, lifetime: Duration) -> Result<TokenClaims, AppError> {
        let now = Utc::now();

        Ok(TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            auth_provider: user.auth_provider.clone(),
            roles: user.roles.clone(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        })
    }

    fn sign(claims: &TokenClaims) -> Result<String, AppError> {
        let secret = JwtConfig::secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰을 생성합니다.
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let claims = Self::build_claims(user, Duration::hours(JwtConfig::expiration_hours()))?;
        Self::sign(&claims)
    }

    /// 리프레시 토큰을 생성합니다.
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AppError> {
        let claims = Self::build_claims(user, Duration::days(JwtConfig::refresh_expiration_days()))?;
        Self::sign(&claims)
    }

    /// 액세스/리프레시 토큰 쌍을 생성하고 리프레시 세션을 Redis에 저장합니다.
    pub async fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;

        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;
        let refresh_ttl = (JwtConfig::refresh_expiration_days() * 24 * 3600) as u64;

        self.token_repo
            .store_refresh_token(
                &user_id,
                &user.username,
                user.auth_provider.as_str(),
                &refresh_token,
                refresh_ttl,
            )
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token: Some(refresh_token),
            expires_in: JwtConfig::expiration_hours() * 3600, // 초 단위
        })
    }

    /// 토큰 서명/만료를 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                },
                _ => AppError::AuthenticationError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// 토큰에서 사용자 ID를 추출합니다.
    pub fn extract_user_id(&self, token: &str) -> Result<String, AppError> {
        let claims = self.verify_token(token)?;
        Ok(claims.sub)
    }

    /// Authorization 헤더에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    ///
    /// 토큰 서명 검증 + Redis 세션 대조를 모두 통과해야 하며,
    /// 성공 시 세션이 새 리프레시 토큰으로 회전됩니다.
    pub async fn refresh_token_pair(&self, user: &User, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.verify_token(refresh_token)?;

        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        if claims.sub != user_id {
            return Err(AppError::AuthenticationError("토큰 소유자가 일치하지 않습니다".to_string()));
        }

        let matches_session = self.token_repo
            .verify_refresh_token(&user_id, refresh_token)
            .await?;

        if !matches_session {
            return Err(AppError::AuthenticationError(
                "만료되었거나 무효화된 리프레시 토큰입니다".to_string(),
            ));
        }

        self.generate_token_pair(user).await
    }

    /// 사용자의 리프레시 세션을 무효화합니다 (로그아웃).
    pub async fn revoke_session(&self, user_id: &str) -> Result<(), AppError> {
        self.token_repo.revoke_refresh_token(user_id).await
    }
}
