use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

pub const REGISTERED_MESSAGE: &str = "User registered successfully!";

/// 클라이언트에 노출되는 사용자 정보
///
/// `password_hash`는 의도적으로 필드가 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn to_chrono(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            first_name,
            last_name,
            phone_number,
            date_of_birth,
            is_active,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            first_name,
            last_name,
            phone_number,
            date_of_birth,
            is_active,
            created_at: to_chrono(created_at),
            updated_at: to_chrono(updated_at),
        }
    }
}

/// `POST /api/register/` 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

impl CreateUserResponse {
    pub fn new(user: User) -> Self {
        Self {
            message: REGISTERED_MESSAGE.to_string(),
            user: UserResponse::from(user),
        }
    }
}
