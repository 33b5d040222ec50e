//! 라우트 설정
//!
//! ```text
//! GET  /                      회원가입 폼
//! GET  /static/js/script.js
//! GET  /static/css/style.css
//! POST /api/register/         회원가입
//! GET  /api/users/            사용자 목록
//! GET  /health                헬스 체크
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;
use crate::services::users::UserService;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_api_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::registration_form)
        .service(handlers::pages::script)
        .service(handlers::pages::stylesheet);
}

fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(handlers::users::json_config())
            .service(handlers::users::register_user)
            .service(handlers::users::list_users),
    );
}

#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "accounts_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": service.storage_name(),
    }))
}
