//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스 계층의 에러를
//! 그대로 HTTP 응답으로 변환합니다.
//!
//! ## 응답 형식
//!
//! 검증 실패는 필드별 메시지 목록으로 내려갑니다.
//!
//! ```json
//! {
//!   "message": "Registration failed",
//!   "errors": {
//!     "username": ["A user with that username already exists."],
//!     "password": ["Ensure this field has at least 8 characters."]
//!   }
//! }
//! ```
//!
//! 그 외의 에러는 500 으로 `{"error": "..."}` 형태입니다.

use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// 검증 실패 응답의 최상위 메시지
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";

/// 필드 이름에 묶이지 않는 에러가 들어가는 키
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// `required` 검증 실패 메시지
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// 메시지 없이 코드만 있는 검증 에러의 기본 문구
fn default_message(code: &str) -> String {
    match code {
        "required" => REQUIRED_MESSAGE.to_string(),
        other => other.to_string(),
    }
}

/// 필드별 검증 에러 목록
///
/// 키 순서가 응답마다 달라지지 않도록 `BTreeMap`을 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 에러 하나만 담긴 맵을 만듭니다.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// `other`에 있는 필드는 기존 메시지를 버리고 `other`의 메시지로 바꿉니다.
    pub fn override_with(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.insert(field, messages);
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// 에러가 없으면 `Ok(())`, 있으면 [`AppError::ValidationError`]
    pub fn into_result(self) -> AppResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(self))
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = Self::new();

        for (field, errs) in errors.field_errors() {
            // 스키마 수준 에러는 `__all__`로 들어옵니다
            let key: &str = if field == "__all__" { NON_FIELD_ERRORS } else { &field };

            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&err.code));
                field_errors.add(key, message);
            }
        }

        field_errors
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(FieldErrors),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: FieldErrors,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ValidationError(errors) => {
                HttpResponse::BadRequest().json(ValidationErrorResponse {
                    message: REGISTRATION_FAILED_MESSAGE.to_string(),
                    errors: errors.clone(),
                })
            }
            other => {
                log::error!("{}", other);
                HttpResponse::build(self.status_code())
                    .json(serde_json::json!({ "error": other.to_string() }))
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥을 붙여 [`AppError::InternalError`]로 바꾸는 확장 트레이트
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

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
