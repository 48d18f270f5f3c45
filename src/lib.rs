//! 인센드 워크스페이스 서비스 백엔드
//!
//! 하나의 인증 대시보드 뒤에서 동작하는 멀티테넌트 워크스페이스 백엔드입니다.
//! 웹사이트 빌더 저장소, 구직 지원 트래커, 레스토랑 예약 관리,
//! 그리고 실시간 페어 프로그래밍(협업 세션) 릴레이를 제공합니다.
//!
//! # Features
//!
//! - **사용자/인증**: 로컬 계정, JWT 액세스/리프레시 토큰, Google OAuth 2.0
//! - **웹사이트 빌더**: 슬러그 고유성을 보장하는 페이지/블록 문서 CRUD
//! - **구직 트래커**: 상태 파이프라인 검증이 있는 지원 내역 관리
//! - **예약 관리**: 날짜/시간 인덱스와 테이블 중복 검사
//! - **협업 릴레이**: 세션 룸 기반 pub/sub 릴레이 (코드 편집, 커서,
//!   채팅, WebRTC 시그널링) + AI 어시스트 브리지
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB + Redis**: 문서 저장소와 캐싱/세션 레이어
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │   HTTP Routes   │     │  WS /ws/collab   │ ← REST + 릴레이 엔드포인트
//! └─────────────────┘     └──────────────────┘
//!          │                        │
//!          ▼                        ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │    Handlers     │     │  Room Registry   │ ← 요청 처리 / 룸 브로드캐스트
//! └─────────────────┘     └──────────────────┘
//!          │                        │
//!          ▼                        ▼
//! ┌─────────────────────────────────────────┐
//! │               Services                  │ ← 비즈니스 로직
//! └─────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use workspace_service_backend::services::websites::WebsiteService;
//! use workspace_service_backend::services::collab::SessionService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let website_service = WebsiteService::instance();
//! let session_service = SessionService::instance();
//!
//! // 웹사이트 생성 및 협업 세션 시작
//! let site = website_service.create_website(&owner_id, request).await?;
//! let session = session_service.create_session(&owner_id, request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod collab;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
