//! 라우트 구성 모듈
//!
//! 모든 HTTP/WebSocket 라우트를 도메인별 스코프로 묶어 등록합니다.
//! 보호가 필요한 스코프에는 [`AuthMiddleware`]를 감쌉니다.

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 애플리케이션의 모든 라우트를 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_auth_routes(cfg);
    configure_website_routes(cfg);
    configure_job_routes(cfg);
    configure_reservation_routes(cfg);
    configure_collab_routes(cfg);
    configure_media_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // Public routes
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
    );

    // Protected routes
    cfg.service(
        web::scope("/api/v1/me")
            .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
            .service(handlers::users::get_me)
            .service(handlers::users::delete_me)
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            // 로컬 인증
            .service(handlers::auth::local_login)
            .service(handlers::auth::verify_token)
            .service(handlers::auth::get_current_user)
            // Google OAuth
            .service(handlers::auth::google_login_url)
            .service(handlers::auth::google_oauth_callback)
    );

    // 인증이 필요한 토큰 관리 라우트들
    cfg.service(
        web::scope("/api/v1/token")
            .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
            .service(handlers::token_handlers::refresh_token_handler)
            .service(handlers::token_handlers::logout_handler)
    );
}

fn configure_website_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/websites")
            .wrap(AuthMiddleware::required())
            .service(handlers::websites::create_website)
            .service(handlers::websites::list_websites)
            .service(handlers::websites::get_website)
            .service(handlers::websites::update_website)
            .service(handlers::websites::publish_website)
            .service(handlers::websites::delete_website)
    );

    // 공개 사이트 조회 (인증 불필요)
    cfg.service(
        web::scope("/api/v1/sites")
            .service(handlers::websites::get_published_site)
    );
}

fn configure_job_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/jobs")
            .wrap(AuthMiddleware::required())
            .service(handlers::jobs::create_application)
            .service(handlers::jobs::list_applications)
            .service(handlers::jobs::get_application)
            .service(handlers::jobs::update_application)
            .service(handlers::jobs::transition_status)
            .service(handlers::jobs::delete_application)
    );
}

fn configure_reservation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reservations")
            .wrap(AuthMiddleware::required())
            .service(handlers::reservations::create_reservation)
            .service(handlers::reservations::list_reservations)
            .service(handlers::reservations::get_reservation)
            .service(handlers::reservations::update_reservation)
            .service(handlers::reservations::set_reservation_status)
            .service(handlers::reservations::delete_reservation)
    );
}

fn configure_collab_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sessions")
            .wrap(AuthMiddleware::required())
            // code 경로가 {session_id}에 잡히지 않도록 먼저 등록한다
            .service(handlers::sessions::get_session_by_code)
            .service(handlers::sessions::close_session)
            .service(handlers::sessions::create_session)
            .service(handlers::sessions::list_sessions)
            .service(handlers::sessions::get_session)
            .service(handlers::sessions::delete_session)
    );

    cfg.service(
        web::scope("/api/v1/ai")
            .wrap(AuthMiddleware::required())
            .service(handlers::ai::ai_assist)
            .service(handlers::ai::translate)
    );

    // 릴레이 WebSocket. join 이벤트가 토큰을 직접 검증하므로 미들웨어 없음.
    cfg.service(
        web::resource("/ws/collab")
            .route(web::get().to(handlers::collab_ws::collab_ws))
    );
}

fn configure_media_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/uploads")
            .wrap(AuthMiddleware::required())
            .service(handlers::uploads::sign_upload)
    );
}

/// 서비스 상태 확인 엔드포인트
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "insend_workspace_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "auth": "JWT + Google OAuth 2.0",
            "realtime": "WebSocket room relay",
            "subsystems": ["websites", "jobs", "reservations", "collab"]
        }
    }))
}
