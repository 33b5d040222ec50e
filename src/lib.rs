//! 회원가입 서비스 백엔드
//!
//! HTML 회원가입 폼, 회원가입 API, 사용자 목록 API를 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← GET /, POST /api/register/, GET /api/users/
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 비밀번호 해싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use accounts_service::repositories::users::InMemoryUserRepository;
//! use accounts_service::routes::configure_all_routes;
//! use accounts_service::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new()), 4));
//! let app = App::new().app_data(service).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
