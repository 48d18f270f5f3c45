//! HTTP/WebSocket 핸들러 모듈
//!
//! 요청/응답 처리만 담당하는 얇은 계층입니다.
//! 검증 → 싱글톤 서비스 호출 → DTO 응답 변환의 동일한 패턴을 따르며,
//! 비즈니스 로직은 전부 서비스 계층에 있습니다.
//!
//! ## 핸들러 구성
//!
//! | 모듈 | 담당 영역 |
//! |------|-----------|
//! | [`users`] | 계정 생성/조회/삭제 |
//! | [`auth`] | 로컬 로그인, Google OAuth, 토큰 검증 |
//! | [`token_handlers`] | 토큰 갱신/로그아웃 |
//! | [`websites`] | 웹사이트 빌더 CRUD + 공개 사이트 조회 |
//! | [`jobs`] | 구직 지원 트래커 CRUD + 상태 전이 |
//! | [`reservations`] | 예약 CRUD + 상태 변경 |
//! | [`sessions`] | 협업 세션 CRUD |
//! | [`ai`] | AI 어시스트/번역 브리지 |
//! | [`uploads`] | 미디어 업로드 서명 |
//! | [`collab_ws`] | 협업 릴레이 WebSocket |

pub mod users;
pub mod auth;
pub mod token_handlers;
pub mod websites;
pub mod jobs;
pub mod reservations;
pub mod sessions;
pub mod ai;
pub mod uploads;
pub mod collab_ws;
