//! # Application Error Handling System
//!
//! 워크스페이스 백엔드의 통합 에러 처리 시스템입니다.
//! Spring의 `@ExceptionHandler` + 글로벌 에러 처리 메커니즘에 해당하는 역할을
//! `thiserror` 열거형 하나와 `actix_web::ResponseError` 구현으로 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 슬러그/이메일 중복, 예약 겹침, 잘못된 상태 전이 |
//! | `AuthenticationError` | 401 Unauthorized | 인증 실패, 토큰 만료 |
//! | `AuthorizationError` | 403 Forbidden | 소유자가 아닌 리소스 접근 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시/세션 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | Google OAuth, 생성형 AI API 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 표준 JSON 형식 `{"error": "..."}`으로 자동 변환됩니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror`로 `Error` trait을, 직접 구현으로 `actix_web::ResponseError`를
/// 제공하여 핸들러에서 `?` 연산자만으로 HTTP 응답까지 연결됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 중 발생하는 오류
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시/세션 연산 오류
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 클라이언트 입력값이 형식/비즈니스 규칙을 만족하지 않음
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청된 리소스가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터 생성 시도나 비즈니스 상태 제약 위반
    ///
    /// 이메일/슬러그/세션 코드 중복, 같은 테이블의 예약 시간 겹침,
    /// 허용되지 않는 지원 상태 전이가 여기에 해당합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 사용자의 신원을 확인할 수 없음 (로그인 실패, 토큰 만료 등)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 인증된 사용자가 해당 작업을 수행할 권한이 없음
    ///
    /// 다른 사용자 소유의 웹사이트/지원 내역/예약/세션에 대한 접근이
    /// 대표적인 사례입니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 써드파티 API 호출 실패 (Google OAuth, 생성형 AI 엔드포인트 등)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// 5xx 에러는 서버 로그에만 자세한 정보를 남기고, 클라이언트에는
    /// 민감한 내부 정보를 노출하지 않도록 메시지를 그대로 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let config = std::fs::read_to_string("config.toml")
///     .context("설정 파일 읽기 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("슬러그는 필수입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("웹사이트를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 사용 중인 슬러그입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("토큰이 만료되었습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("소유자가 아닙니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("AI 엔드포인트 응답 실패".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
