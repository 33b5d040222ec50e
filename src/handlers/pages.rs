//! 회원가입 폼과 정적 자산
//!
//! 파일은 컴파일 시점에 바이너리에 포함됩니다. 서버 측 렌더링은 없습니다.

use actix_web::{get, http::header::ContentType, HttpResponse};

const REGISTER_HTML: &str = include_str!("../../templates/register.html");
const SCRIPT_JS: &str = include_str!("../../static/js/script.js");
const STYLE_CSS: &str = include_str!("../../static/css/style.css");

#[get("/")]
pub async fn registration_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(REGISTER_HTML)
}

#[get("/static/js/script.js")]
pub async fn script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(SCRIPT_JS)
}

#[get("/static/css/style.css")]
pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(STYLE_CSS)
}
