//! # 사용자 리포지토리 인터페이스
//!
//! 서비스 계층은 이 트레이트만 알고, 실제 저장소(MongoDB, 메모리)는
//! 애플리케이션 시작 시 설정에 따라 주입됩니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

pub const USERS_COLLECTION: &str = "users";

pub const DUPLICATE_USERNAME_MESSAGE: &str = "A user with that username already exists.";

/// 사용자 데이터 액세스 리포지토리
///
/// ## 구현 규칙
///
/// - `create`는 단일 원자적 쓰기입니다. 사용자명이 이미 있으면 아무것도
///   저장하지 않고 `username` 필드 검증 에러를 돌려줍니다.
/// - `find_all`은 생성 순서(오래된 것부터)로 반환합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 로그에 표시할 구현체 이름
    fn name(&self) -> &str;

    /// 인덱스 생성 등 최초 한 번 필요한 준비 작업
    async fn init(&self) -> AppResult<()>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 사용자를 저장하고 ID가 채워진 레코드를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    async fn find_all(&self) -> AppResult<Vec<User>>;
}
