//! # 미디어 업로드 서명 서비스
//!
//! 클라이언트가 미디어 CDN에 직접 업로드할 때 쓰는 서명 파라미터를
//! 발급합니다. 파일 바이트는 이 서버를 거치지 않습니다.
//!
//! 서명 방식: 서명 대상 파라미터를 키 사전순으로 `k=v&...` 연결한 뒤
//! API secret을 이어 붙여 SHA-256 해시의 hex를 사용합니다.

use singleton_macro::service;
use sha2::{Digest, Sha256};
use crate::{
    config::MediaConfig,
    core::errors::AppError,
    domain::dto::media::response::SignedUploadResponse,
};

/// 업로드 서명 서비스
#[service(name = "upload")]
pub struct UploadService {
    // 외부 의존성 없음
}

impl UploadService {
    /// 서명된 직접 업로드 파라미터를 발급합니다.
    pub fn sign_upload(
        &self,
        folder: Option<String>,
        public_id: Option<String>,
    ) -> Result<SignedUploadResponse, AppError> {
        let timestamp = chrono::Utc::now().timestamp();

        let signature = compute_signature(
            folder.as_deref(),
            public_id.as_deref(),
            timestamp,
            &MediaConfig::api_secret(),
        );

        Ok(SignedUploadResponse {
            cloud_name: MediaConfig::cloud_name(),
            api_key: MediaConfig::api_key(),
            timestamp,
            signature,
            folder,
            public_id,
        })
    }
}

/// 서명 문자열을 계산합니다.
///
/// CDN 쪽 검증과 동일해야 하므로 파라미터는 키 사전순으로 정렬되고,
/// 값이 없는 파라미터는 서명에서 제외됩니다.
fn compute_signature(
    folder: Option<&str>,
    public_id: Option<&str>,
    timestamp: i64,
    api_secret: &str,
) -> String {
    let timestamp_value = timestamp.to_string();

    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(folder) = folder {
        params.push(("folder", folder));
    }
    if let Some(public_id) = public_id {
        params.push(("public_id", public_id));
    }
    params.push(("timestamp", &timestamp_value));
    params.sort_by_key(|(k, _)| *k);

    let to_sign = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());

    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_deterministic() {
        let a = compute_signature(Some("sites"), Some("hero"), 1700000000, "secret");
        let b = compute_signature(Some("sites"), Some("hero"), 1700000000, "secret");

        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // SHA-256 hex
    }

    #[test]
    fn test_signature_changes_with_inputs() {
        let base = compute_signature(Some("sites"), None, 1700000000, "secret");

        assert_ne!(base, compute_signature(Some("blog"), None, 1700000000, "secret"));
        assert_ne!(base, compute_signature(Some("sites"), None, 1700000001, "secret"));
        assert_ne!(base, compute_signature(Some("sites"), None, 1700000000, "other"));
    }

    #[test]
    fn test_omitted_params_are_excluded_from_signature() {
        // folder가 없는 서명은 folder를 빈 값으로 넣은 서명과 달라야 한다
        let without_folder = compute_signature(None, None, 1700000000, "secret");
        let empty_folder = compute_signature(Some(""), None, 1700000000, "secret");

        assert_ne!(without_folder, empty_folder);
    }
}
