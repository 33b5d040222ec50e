//! 회원가입 요청 DTO
//!
//! 요청 본문은 JSON 객체(`serde_json::Map`)로 먼저 받은 뒤
//! [`RegisterUserRequest::from_json_map`]으로 옮깁니다. 필드가 빠져도
//! 역직렬화 단계에서 실패하지 않고, 문자열이 아닌 값은 해당 필드의
//! 에러로 돌려줍니다.
//!
//! ```json
//! {
//!   "username": "jdoe",
//!   "email": "jdoe@example.com",
//!   "first_name": "John",
//!   "last_name": "Doe",
//!   "phone_number": "+821012345678",
//!   "date_of_birth": "1990-04-01",
//!   "password": "Secret123",
//!   "password_confirm": "Secret123"
//! }
//! ```

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::core::errors::FieldErrors;

pub use crate::core::errors::REQUIRED_MESSAGE;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";
pub const NOT_A_STRING_MESSAGE: &str = "Not a valid string.";
pub const PASSWORD_TOO_LONG_MESSAGE: &str = "Ensure this field has no more than 72 bytes.";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// bcrypt는 앞의 72바이트만 해시에 반영합니다
pub const MAX_PASSWORD_BYTES: usize = 72;

/// 영문/숫자/`_`와 `@ . + -`만 허용
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.@+-]+$").expect("valid username regex")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?1?\d{9,15}$").expect("valid phone regex")
});

#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterUserRequest {
    #[validate(
        required,
        length(max = 150, message = "Ensure this field has no more than 150 characters."),
        regex(
            path = *USERNAME_REGEX,
            message = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
        )
    )]
    pub username: Option<String>,

    #[validate(
        required,
        email(message = "Enter a valid email address.")
    )]
    pub email: Option<String>,

    #[validate(
        required,
        length(max = 150, message = "Ensure this field has no more than 150 characters.")
    )]
    pub first_name: Option<String>,

    #[validate(
        required,
        length(max = 150, message = "Ensure this field has no more than 150 characters.")
    )]
    pub last_name: Option<String>,

    #[validate(regex(
        path = *PHONE_REGEX,
        message = "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed."
    ))]
    pub phone_number: Option<String>,

    #[validate(custom(function = "validate_date_of_birth"))]
    pub date_of_birth: Option<String>,

    #[validate(
        required,
        length(min = 8, message = "Ensure this field has at least 8 characters.")
    )]
    pub password: Option<String>,

    #[validate(required)]
    pub password_confirm: Option<String>,

    /// 문자열이 아닌 값이 들어온 필드
    pub type_errors: FieldErrors,
}

/// 검증을 마친 가입 정보
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub password: String,
}

fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    let date = parse_date(value).map_err(|_| {
        ValidationError::new("invalid_date")
            .with_message("Date has wrong format. Use YYYY-MM-DD.".into())
    })?;

    if date > Utc::now().date_naive() {
        return Err(ValidationError::new("future_date")
            .with_message("Date of birth cannot be in the future.".into()));
    }

    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// 앞뒤 공백을 제거하고 빈 문자열은 값이 없는 것으로 봅니다.
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 비밀번호는 공백도 값의 일부이므로 자르지 않습니다.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 문자열은 그대로, `null`은 값 없음, 그 외 타입은 필드 에러로 기록합니다.
fn take_string(map: &mut Map<String, Value>, field: &str, type_errors: &mut FieldErrors) -> Option<String> {
    match map.remove(field) {
        Some(Value::String(value)) => Some(value),
        None | Some(Value::Null) => None,
        Some(_) => {
            type_errors.add(field, NOT_A_STRING_MESSAGE);
            None
        }
    }
}

impl RegisterUserRequest {
    /// JSON 객체에서 요청을 만듭니다. 모르는 키는 무시합니다.
    pub fn from_json_map(mut map: Map<String, Value>) -> Self {
        let mut type_errors = FieldErrors::new();
        let mut take = |field: &str| take_string(&mut map, field, &mut type_errors);

        let username = take("username");
        let email = take("email");
        let first_name = take("first_name");
        let last_name = take("last_name");
        let phone_number = take("phone_number");
        let date_of_birth = take("date_of_birth");
        let password = take("password");
        let password_confirm = take("password_confirm");

        Self {
            username,
            email,
            first_name,
            last_name,
            phone_number,
            date_of_birth,
            password,
            password_confirm,
            type_errors,
        }
    }

    /// 폼에서 넘어온 값을 검증 전에 정리합니다.
    pub fn normalized(self) -> Self {
        Self {
            username: trimmed(self.username),
            email: trimmed(self.email),
            first_name: trimmed(self.first_name),
            last_name: trimmed(self.last_name),
            phone_number: trimmed(self.phone_number),
            date_of_birth: trimmed(self.date_of_birth),
            password: non_empty(self.password),
            password_confirm: non_empty(self.password_confirm),
            type_errors: self.type_errors,
        }
    }

    /// 저장소 조회 없이 확인할 수 있는 모든 규칙을 검사합니다.
    pub fn validate_fields(&self) -> FieldErrors {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        if let (Some(password), Some(confirm)) = (&self.password, &self.password_confirm) {
            if password != confirm {
                errors.add("password_confirm", PASSWORD_MISMATCH_MESSAGE);
            }
        }

        if self.password.as_ref().is_some_and(|p| p.len() > MAX_PASSWORD_BYTES) {
            errors.add("password", PASSWORD_TOO_LONG_MESSAGE);
        }

        // 타입이 틀린 필드는 "required" 대신 타입 에러만 남깁니다
        errors.override_with(self.type_errors.clone());

        errors
    }

    /// 필수 필드가 하나라도 없으면 `None`.
    pub fn into_registration(self) -> Option<Registration> {
        let date_of_birth = match self.date_of_birth {
            Some(raw) => Some(parse_date(&raw).ok()?),
            None => None,
        };

        Some(Registration {
            username: self.username?,
            email: self.email?,
            first_name: self.first_name?,
            last_name: self.last_name?,
            phone_number: self.phone_number,
            date_of_birth,
            password: self.password?,
        })
    }
}
