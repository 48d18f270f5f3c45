//! 미디어 업로드 서명 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};

fn validate_path_component(value: &str) -> Result<(), ValidationError> {
    // CDN 경로로 들어가는 값이므로 안전한 문자만 허용한다
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/')) {
        return Err(ValidationError::new("invalid_path_component")
            .with_message("영숫자, 하이픈, 언더스코어, 슬래시만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 직접 업로드 서명 발급 요청
#[derive(Debug, Deserialize, Validate)]
pub struct SignUploadRequest {
    #[validate(length(min = 1, max = 200), custom(function = "validate_path_component"))]
    pub folder: Option<String>,

    #[validate(length(min = 1, max = 200), custom(function = "validate_path_component"))]
    pub public_id: Option<String>,
}
