//! # 메모리 사용자 리포지토리
//!
//! 프로세스 메모리에 사용자를 보관합니다. `STORAGE_BACKEND=memory`로
//! MongoDB 없이 서버를 띄우거나, 통합 테스트에서 사용합니다.
//!
//! 중복 확인과 삽입은 같은 쓰기 잠금 안에서 일어나므로 동시에 같은
//! 사용자명으로 가입해도 하나만 저장됩니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult, FieldErrors};
use crate::domain::entities::users::User;
use crate::repositories::users::user_repo::{UserRepository, DUPLICATE_USERNAME_MESSAGE};

#[derive(Default)]
pub struct InMemoryUserRepository {
    // 삽입 순서 = 생성 순서
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E>(_: E) -> AppError {
    AppError::InternalError("user store lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    fn name(&self) -> &str {
        "memory"
    }

    async fn init(&self) -> AppResult<()> {
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::ValidationError(FieldErrors::single(
                "username",
                DUPLICATE_USERNAME_MESSAGE,
            )));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::NewUser;

    fn user(username: &str) -> User {
        User::new(NewUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            phone_number: None,
            date_of_birth: None,
            password_hash: "hash".to_string(),
        })
    }

    #[actix_web::test]
    async fn test_create_assigns_id() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("alice")).await.unwrap();

        assert!(created.id.is_some());
        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.find_by_username("alice").await.unwrap().unwrap().id,
            created.id
        );
    }

    #[actix_web::test]
    async fn test_duplicate_username_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("alice")).await.unwrap();

        let err = repo.create(user("alice")).await.unwrap_err();
        match err {
            AppError::ValidationError(errors) => {
                assert_eq!(errors.get("username").unwrap(), [DUPLICATE_USERNAME_MESSAGE]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_username_match_is_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("alice")).await.unwrap();

        assert!(repo.create(user("Alice")).await.is_ok());
        assert!(repo.find_by_username("ALICE").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_find_all_keeps_creation_order() {
        let repo = InMemoryUserRepository::new();
        for name in ["carol", "alice", "bob"] {
            repo.create(user(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
    }
}
