//! User Entity Implementation
//!
//! 저장소에 보관되는 사용자 레코드입니다. `password_hash`는 이 엔티티에만
//! 존재하며 응답 DTO로 옮겨지지 않습니다.

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 저장 시점에 저장소가 부여하는 ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// bcrypt 해시 (솔트 포함)
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 검증을 통과한 가입 정보. 비밀번호는 이미 해시된 상태입니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub password_hash: String,
}

impl User {
    pub fn new(new_user: NewUser) -> Self {
        let now = DateTime::now();
        let NewUser {
            username,
            email,
            first_name,
            last_name,
            phone_number,
            date_of_birth,
            password_hash,
        } = new_user;

        Self {
            id: None,
            username,
            email,
            first_name,
            last_name,
            phone_number,
            date_of_birth,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
