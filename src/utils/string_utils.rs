//! 문자열 검증, 정리, 변환 유틸리티
//!
//! 요청 데이터 정리와 웹사이트 슬러그/세션 코드 생성에 사용되는
//! 공통 문자열 함수들입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드를 검증하고 앞뒤 공백을 제거합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }

    Ok(trimmed.to_string())
}

/// 선택적 문자열을 정리합니다. 공백뿐인 값은 None으로 정규화합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 제목에서 URL 슬러그를 생성합니다.
///
/// 소문자화 후 영숫자가 아닌 문자 구간을 하이픈 하나로 접고,
/// 양끝 하이픈을 제거합니다. 비어있는 결과는 "site"로 대체합니다.
///
/// ```rust,ignore
/// assert_eq!(slugify("My Portfolio Site!"), "my-portfolio-site");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_dash = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_dash = false;
        } else if !last_was_dash && !slug.is_empty() {
            slug.push('-');
            last_was_dash = true;
        }
    }

    let slug = slug.trim_end_matches('-').to_string();

    if slug.is_empty() {
        "site".to_string()
    } else {
        slug
    }
}

/// 협업 세션 코드를 생성합니다.
///
/// UUID v4에서 하이픈을 제거한 뒤 앞에서 요청 길이만큼 잘라
/// 소문자 영숫자 코드를 만듭니다. 고유성은 리포지토리의 유니크
/// 인덱스와 충돌 재시도 루프가 보장합니다.
pub fn generate_session_code(length: usize) -> String {
    uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(length)
        .collect()
}

/// Serde deserializer: 선택적 문자열을 읽으며 공백뿐인 값을 None으로 만듭니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        // 실패 케이스
        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("My Portfolio Site"), "my-portfolio-site");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  trailing   spaces  "), "trailing-spaces");
    }

    #[test]
    fn test_slugify_collapses_symbol_runs() {
        assert_eq!(slugify("a -- b ++ c"), "a-b-c");
        assert_eq!(slugify("2024 / 상반기 회고"), "2024");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify(""), "site");
        assert_eq!(slugify("!!!"), "site");
    }

    #[test]
    fn test_generate_session_code_length_and_charset() {
        let code = generate_session_code(8);
        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

        // 두 코드가 같을 확률은 무시 가능한 수준이다
        assert_ne!(generate_session_code(8), generate_session_code(8));
    }
}
