//! 사용자 관리 서비스 모듈
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (비용은 `PasswordConfig`에서 결정)
//! - 사용자명 중복 방지
//! - 비밀번호는 로그와 응답 어디에도 남지 않음

pub mod user_service;

pub use user_service::UserService;
