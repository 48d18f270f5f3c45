//! 토큰 관리 요청 DTO

use serde::Deserialize;

/// 토큰 갱신 요청
#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}
