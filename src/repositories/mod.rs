//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use accounts_service::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = repo.find_by_username("jdoe").await?;
//! ```

pub mod users;
