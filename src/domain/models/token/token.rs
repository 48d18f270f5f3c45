//! JWT 클레임과 토큰 쌍 모델

use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 액세스/리프레시 토큰에 공통으로 들어가는 클레임
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (hex ObjectId)
    pub sub: String,
    pub auth_provider: AuthProvider,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

/// 로그인/리프레시 응답으로 내려가는 토큰 쌍
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: i64,
}
