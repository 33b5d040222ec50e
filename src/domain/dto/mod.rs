//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문 타입입니다. 요청 DTO는 `validator` 규칙을,
//! 응답 DTO는 엔티티에서의 변환(`From<User>`)을 가집니다.

pub mod users;
