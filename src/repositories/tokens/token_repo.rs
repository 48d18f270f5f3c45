//! # 토큰 세션 리포지토리
//!
//! 리프레시 토큰 세션을 Redis에 보관합니다.
//! 사용자당 하나의 세션만 유지하며, TTL은 리프레시 토큰 만료와 일치합니다.
//!
//! ## 키 구조
//!
//! - `refresh_token:{user_id}` → [`RefreshTokenInfo`] (JSON)

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use chrono::Utc;
use singleton_macro::repository;
use crate::caching::redis::RedisClient;
use crate::core::errors::AppError;
use crate::core::registry::Repository;

/// Redis에 저장되는 리프레시 토큰 세션 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenInfo {
    pub user_id: String,
    pub username: String,
    pub auth_provider: String,
    pub login_at: i64,
    pub refresh_token: String,
    pub expires_at: i64,
}

/// 리프레시 토큰 세션 리포지토리
#[repository(name = "token", collection = "tokens")]
pub struct TokenRepository {
    /// Redis 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl TokenRepository {
    fn session_key(user_id: &str) -> String {
        format!("refresh_token:{}", user_id)
    }

    /// 리프레시 토큰 세션을 저장합니다. 기존 세션은 덮어씁니다.
    pub async fn store_refresh_token(
        &self,
        user_id: &str,
        username: &str,
        auth_provider: &str,
        refresh_token: &str,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        if ttl_seconds == 0 {
            return Err(AppError::InternalError(
                "리프레시 토큰 TTL은 0이 될 수 없습니다".to_string(),
            ));
        }

        // 최소 TTL 1분 보장
        let safe_ttl = ttl_seconds.max(60);
        let now = Utc::now().timestamp();

        let token_info = RefreshTokenInfo {
            user_id: user_id.to_string(),
            username: username.to_string(),
            auth_provider: auth_provider.to_string(),
            login_at: now,
            refresh_token: refresh_token.to_string(),
            expires_at: now + safe_ttl as i64,
        };

        self.redis
            .set_with_expiry(&Self::session_key(user_id), &token_info, safe_ttl as usize)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::debug!("리프레시 토큰 세션 저장: user_id={}, ttl={}초", user_id, safe_ttl);
        Ok(())
    }

    /// 사용자의 리프레시 토큰 세션을 조회합니다.
    pub async fn find_refresh_token(&self, user_id: &str) -> Result<Option<RefreshTokenInfo>, AppError> {
        self.redis
            .get::<RefreshTokenInfo>(&Self::session_key(user_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 제시된 리프레시 토큰이 저장된 세션과 일치하는지 검증합니다.
    ///
    /// 토큰 회전(rotation) 후 이전 토큰으로의 갱신 시도를 차단합니다.
    pub async fn verify_refresh_token(&self, user_id: &str, refresh_token: &str) -> Result<bool, AppError> {
        match self.find_refresh_token(user_id).await? {
            Some(info) => Ok(info.refresh_token == refresh_token),
            None => Ok(false),
        }
    }

    /// 사용자의 리프레시 토큰 세션을 삭제합니다 (로그아웃).
    pub async fn revoke_refresh_token(&self, user_id: &str) -> Result<(), AppError> {
        self.redis
            .del(&Self::session_key(user_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
