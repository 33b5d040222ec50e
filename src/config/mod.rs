//! 애플리케이션 설정 모듈
//!
//! 모든 설정은 환경변수에서 읽습니다. `main`에서 `PROFILE`에 맞는
//! `.env` 파일을 먼저 로드합니다.

pub mod data_config;
pub mod server_config;

pub use data_config::*;
pub use server_config::*;
