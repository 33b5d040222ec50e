//! # 사용자 서비스
//!
//! 회원가입 검증, 비밀번호 해싱, 저장, 목록 조회를 담당합니다.
//!
//! ## 가입 처리 순서
//!
//! 1. 입력 정리 (공백 제거, 빈 문자열 → 값 없음)
//! 2. 필드 규칙 검증 + 비밀번호 확인 일치
//! 3. 사용자명 중복 조회 (다른 에러와 함께 한 번에 보고)
//! 4. bcrypt 해싱 후 단일 쓰기로 저장

use std::sync::Arc;
use std::time::Instant;

use bcrypt::hash;
use log::{debug, info, warn};

use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        dto::users::{
            request::RegisterUserRequest,
            response::{CreateUserResponse, UserResponse},
        },
        entities::users::{NewUser, User},
    },
    repositories::users::{user_repo::DUPLICATE_USERNAME_MESSAGE, UserRepository},
};

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
        }
    }

    pub fn storage_name(&self) -> &str {
        self.user_repo.name()
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드별 에러. 아무것도 저장되지 않음
    /// * `AppError::DatabaseError` - 저장소 장애
    /// * `AppError::InternalError` - 해싱 실패
    pub async fn register_user(&self, request: RegisterUserRequest) -> AppResult<CreateUserResponse> {
        let start_time = Instant::now();
        let request = request.normalized();

        let mut errors = request.validate_fields();

        if let Some(username) = request.username.as_deref() {
            if !errors.contains("username")
                && self.user_repo.find_by_username(username).await?.is_some()
            {
                errors.add("username", DUPLICATE_USERNAME_MESSAGE);
            }
        }

        if !errors.is_empty() {
            warn!("회원가입 거부: {}", errors);
            return Err(AppError::ValidationError(errors));
        }

        let registration = request.into_registration().ok_or_else(|| {
            AppError::InternalError("검증 후 필수 필드가 비어 있습니다".to_string())
        })?;

        let hash_start = Instant::now();
        let password_hash = hash(&registration.password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(NewUser {
            username: registration.username,
            email: registration.email,
            first_name: registration.first_name,
            last_name: registration.last_name,
            phone_number: registration.phone_number,
            date_of_birth: registration.date_of_birth,
            password_hash,
        });

        let created_user = self.user_repo.create(user).await?;

        info!(
            "사용자 등록 완료: {} ({}) in {:?}",
            created_user.username,
            created_user.id_string().unwrap_or_default(),
            start_time.elapsed()
        );

        Ok(CreateUserResponse::new(created_user))
    }

    /// 모든 사용자를 생성 순서대로 반환합니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::FieldErrors;
    use crate::repositories::users::InMemoryUserRepository;

    fn service() -> (UserService, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        (UserService::new(repo.clone(), 4), repo)
    }

    fn request(username: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            username: Some(username.to_string()),
            email: Some(format!("{}@example.com", username)),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            phone_number: None,
            date_of_birth: None,
            password: Some("Secret123".to_string()),
            password_confirm: Some("Secret123".to_string()),
            type_errors: FieldErrors::new(),
        }
    }

    fn field_errors(err: AppError) -> FieldErrors {
        match err {
            AppError::ValidationError(errors) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_register_hashes_password() {
        let (service, repo) = service();
        let response = service.register_user(request("alice")).await.unwrap();

        assert_eq!(response.user.username, "alice");
        assert!(!response.user.id.is_empty());

        let stored = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "Secret123");
        assert!(bcrypt::verify("Secret123", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_duplicate_username_reported_with_other_errors() {
        let (service, repo) = service();
        service.register_user(request("alice")).await.unwrap();

        let mut duplicate = request("alice");
        duplicate.email = Some("broken".to_string());

        let errors = field_errors(service.register_user(duplicate).await.unwrap_err());
        assert_eq!(errors.get("username").unwrap(), [DUPLICATE_USERNAME_MESSAGE]);
        assert!(errors.contains("email"));
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_invalid_request_persists_nothing() {
        let (service, repo) = service();
        let mut bad = request("bob");
        bad.password_confirm = Some("Different1".to_string());

        let errors = field_errors(service.register_user(bad).await.unwrap_err());
        assert!(errors.contains("password_confirm"));
        assert!(repo.is_empty());
    }

    #[actix_web::test]
    async fn test_list_users_in_creation_order() {
        let (service, _) = service();
        for name in ["zed", "amy"] {
            service.register_user(request(name)).await.unwrap();
        }

        let users = service.list_users().await.unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["zed", "amy"]);
    }
}
