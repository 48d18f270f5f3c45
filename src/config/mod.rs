//! # Configuration Module
//!
//! 워크스페이스 백엔드의 설정 관리를 담당하는 모듈입니다.
//! Spring의 `@Configuration` 클래스와 유사하게, 환경 변수 기반의
//! 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - 인증, OAuth, JWT 관련 설정
//! - [`integration_config`] - 생성형 AI 브리지, 미디어 업로드 서명, 협업 룸 설정
//!
//! ## 설계 원칙
//!
//! - **환경 분리**: 개발/테스트/스테이징/운영 환경별 기본값 제공
//! - **보안 우선**: 민감한 값은 환경 변수로만 제공, 운영 필수값 누락 시 패닉
//! - **타입 안전성**: 파싱 실패 시 검증된 기본값으로 폴백
//!
//! ## 필수 환경 변수 (운영)
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export JWT_SECRET="your-super-secret-key"
//! export GOOGLE_CLIENT_ID="..."
//! export GOOGLE_CLIENT_SECRET="..."
//! export GOOGLE_REDIRECT_URI="https://yourdomain.com/auth/google/callback"
//! export GENAI_API_KEY="..."
//! export MEDIA_CLOUD_NAME="..."
//! export MEDIA_API_KEY="..."
//! export MEDIA_API_SECRET="..."
//! ```

pub mod data_config;
pub mod auth_config;
pub mod integration_config;

pub use data_config::*;
pub use auth_config::*;
pub use integration_config::*;
