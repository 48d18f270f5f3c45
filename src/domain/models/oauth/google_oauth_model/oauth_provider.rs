//! OAuth 프로바이더 부가 데이터

use serde::{Deserialize, Serialize};

/// 사용자 엔티티에 내장되는 OAuth 계정 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthData {
    /// 프로바이더 쪽 사용자 ID
    pub provider_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_profile_image: Option<String>,
    /// 프로바이더가 내려준 원본 프로필 (필요 시 보관)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_data: Option<serde_json::Value>,
}
