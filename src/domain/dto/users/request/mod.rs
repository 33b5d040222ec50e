pub mod register_user_request;

pub use register_user_request::{Registration, RegisterUserRequest};
