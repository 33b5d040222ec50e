//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 서비스는 리포지토리 트레이트 객체를 주입받아
//! 저장소 구현과 분리됩니다.

pub mod users;
