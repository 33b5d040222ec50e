//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 기능을 모아둔 모듈입니다.
//!
//! - [`errors`]: `AppError`, 필드별 검증 에러 맵 `FieldErrors`, HTTP 응답 변환

pub mod errors;
