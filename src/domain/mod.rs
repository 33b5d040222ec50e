//! # Domain Layer Module
//!
//! 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 보관되는 사용자 레코드
//! └── dto       - 요청/응답 계약 (검증 규칙 포함)
//! ```
//!
//! 엔티티는 비밀번호 해시를 들고 있고, 응답 DTO는 해시를 갖지 않습니다.
//! 엔티티를 그대로 JSON 응답으로 내보내지 마세요.

pub mod entities;
pub mod dto;
