//! # HTTP Handlers
//!
//! - [`pages`]: 회원가입 HTML 폼, 스크립트, 스타일시트
//! - [`users`]: 회원가입 / 사용자 목록 JSON API
//!
//! 핸들러는 요청을 풀고 `UserService`를 호출한 뒤 응답을 만드는 일만 합니다.
//! 에러는 `AppError`의 `ResponseError` 구현이 HTTP 응답으로 바꿉니다.

pub mod pages;
pub mod users;
