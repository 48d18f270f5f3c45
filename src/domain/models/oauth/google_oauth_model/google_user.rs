//! Google userinfo 엔드포인트 응답 모델

use serde::Deserialize;

/// `https://www.googleapis.com/oauth2/v2/userinfo` 응답
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub given_name: String,
    #[serde(default)]
    pub family_name: Option<String>,
    pub picture: Option<String>,
    pub verified_email: bool,
}
