//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증과 Google OAuth 2.0 소셜 로그인을 담당하는 서비스들입니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - Redis 세션 대조를 통한 리프레시 토큰 회전
//! - CSRF 방지 (OAuth State 매개변수)

pub mod token_service;
pub mod google_auth_service;

pub use token_service::TokenService;
pub use google_auth_service::GoogleAuthService;
