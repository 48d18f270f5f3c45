//! 미디어 업로드 서명 응답 DTO

use serde::Serialize;

/// 클라이언트가 CDN에 직접 업로드할 때 사용하는 서명 파라미터
#[derive(Debug, Serialize)]
pub struct SignedUploadResponse {
    pub cloud_name: String,
    pub api_key: String,
    pub timestamp: i64,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}
