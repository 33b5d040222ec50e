//! # MongoDB 사용자 리포지토리
//!
//! - **컬렉션명**: `users`
//! - **인덱스**: username(unique), created_at(asc)
//!
//! 사용자명 중복은 유니크 인덱스가 최종적으로 막습니다. 서비스의 사전 조회와
//! 삽입 사이에 같은 이름이 들어오면 duplicate key(11000) 에러가 나고,
//! 이를 `username` 필드 검증 에러로 바꿔 돌려줍니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{info, warn};
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult, FieldErrors};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::repositories::users::user_repo::{
    UserRepository, DUPLICATE_USERNAME_MESSAGE, USERS_COLLECTION,
};

const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn db_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn init(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": 1, "_id": 1 })
            .options(IndexOptions::builder()
                .name("created_at_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, created_at_index])
            .await
            .map_err(db_error)?;

        info!("✅ users 컬렉션 인덱스 준비 완료 ({})", self.db.database_name());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(db_error)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = match self.collection().insert_one(&user).await {
            Ok(result) => result,
            Err(e) if is_duplicate_key(&e) => {
                warn!("사용자명 중복으로 저장 거부: {}", user.username);
                return Err(AppError::ValidationError(FieldErrors::single(
                    "username",
                    DUPLICATE_USERNAME_MESSAGE,
                )));
            }
            Err(e) => return Err(db_error(e)),
        };

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted_id 가 ObjectId 가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await
            .map_err(db_error)?;

        cursor.try_collect::<Vec<User>>().await.map_err(db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::from_document;
    use mongodb::error::{Error, WriteError};

    fn write_error(code: i32) -> Error {
        let write_error: WriteError = from_document(doc! {
            "code": code,
            "errmsg": "E11000 duplicate key error collection: accounts.users index: username_unique",
        })
        .unwrap();
        Error::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn test_duplicate_key_write_error_is_detected() {
        assert!(is_duplicate_key(&write_error(DUPLICATE_KEY_CODE)));
    }

    #[test]
    fn test_other_errors_are_not_duplicates() {
        // 121: document validation failure
        assert!(!is_duplicate_key(&write_error(121)));
        assert!(!is_duplicate_key(&Error::from(std::io::Error::other("connection reset"))));
    }

    #[test]
    fn test_db_error_keeps_message() {
        let error = db_error(Error::from(std::io::Error::other("connection reset")));
        assert!(matches!(error, AppError::DatabaseError(ref msg) if msg.contains("connection reset")));
    }
}
