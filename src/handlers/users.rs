//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/register/` | 회원가입 | 201 Created / 400 Bad Request |
//! | `GET` | `/api/users/` | 전체 사용자 목록 | 200 OK |
//!
//! 목록 엔드포인트는 인증, 필터, 페이징이 없습니다. 테스트/개발 용도입니다.

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::{Map, Value};

use crate::core::errors::{AppError, FieldErrors, NON_FIELD_ERRORS};
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::services::users::UserService;

const MAX_JSON_PAYLOAD: usize = 16 * 1024;

/// 회원가입 요청 본문 설정
///
/// JSON 파싱 실패도 가입 실패와 같은 `{message, errors}` 형식으로 돌려줍니다.
/// 본문은 JSON 객체여야 하므로 배열이나 스칼라도 여기서 걸러집니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD)
        .error_handler(|err, _req: &HttpRequest| {
            AppError::ValidationError(FieldErrors::single(NON_FIELD_ERRORS, err.to_string())).into()
        })
}

/// 회원가입 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "jdoe",
///   "email": "jdoe@example.com",
///   "first_name": "John",
///   "last_name": "Doe",
///   "password": "Secret123",
///   "password_confirm": "Secret123"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "message": "User registered successfully!",
///   "user": {
///     "id": "507f1f77bcf86cd799439011",
///     "username": "jdoe",
///     "email": "jdoe@example.com",
///     "first_name": "John",
///     "last_name": "Doe",
///     "phone_number": null,
///     "date_of_birth": null,
///     "is_active": true,
///     "created_at": "2024-01-01T00:00:00Z",
///     "updated_at": "2024-01-01T00:00:00Z"
///   }
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "message": "Registration failed",
///   "errors": { "username": ["A user with that username already exists."] }
/// }
/// ```
#[post("/register/")]
pub async fn register_user(
    service: web::Data<UserService>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let request = RegisterUserRequest::from_json_map(payload.into_inner());
    let response = service.register_user(request).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 목록 핸들러
#[get("/users/")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}
