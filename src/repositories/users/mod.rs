//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] 트레이트와 두 구현체를 제공합니다.
//!
//! | 구현체 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`MongoUserRepository`] | MongoDB `users` 컬렉션 | 운영 |
//! | [`InMemoryUserRepository`] | 프로세스 메모리 | 로컬 개발, 테스트 |

pub mod user_repo;
pub mod mongo_user_repo;
pub mod memory_user_repo;

pub use memory_user_repo::InMemoryUserRepository;
pub use mongo_user_repo::MongoUserRepository;
pub use user_repo::UserRepository;
