//! 데이터 및 보안 관련 설정 관리 모듈
//!
//! 실행 환경, 저장소 백엔드, MongoDB 접속 정보, 비밀번호 해싱 비용을
//! 환경변수에서 읽어옵니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경변수에서 현재 환경을 결정합니다. 없으면 운영 환경입니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
///
/// `BCRYPT_COST`가 4-15 범위의 정수이면 그대로 사용하고,
/// 아니면 실행 환경별 기본값을 사용합니다.
pub struct PasswordConfig;

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    pub fn bcrypt_cost() -> u32 {
        Self::resolve_cost(env::var("BCRYPT_COST").ok().as_deref(), &Environment::current())
    }

    pub fn resolve_cost(raw: Option<&str>, env: &Environment) -> u32 {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env))
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 사용자 레코드를 보관할 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// 외부 MongoDB (기본값)
    MongoDb,
    /// 프로세스 메모리. 재시작하면 사라지므로 로컬 개발과 테스트 전용
    Memory,
}

impl StorageBackend {
    pub fn from_env() -> Self {
        env::var("STORAGE_BACKEND")
            .map(|value| Self::from_str(&value))
            .unwrap_or(StorageBackend::MongoDb)
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            other => {
                if other != "mongodb" && other != "mongo" {
                    log::warn!("알 수 없는 STORAGE_BACKEND '{}', mongodb 사용", s);
                }
                StorageBackend::MongoDb
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "mongodb",
            StorageBackend::Memory => "memory",
        }
    }
}

/// MongoDB 접속 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub app_name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE: &'static str = "accounts";

    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| Self::DEFAULT_URI.to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string()),
            app_name: "accounts_service".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_override_bounds() {
        let prod = Environment::Production;
        assert_eq!(PasswordConfig::resolve_cost(Some("6"), &prod), 6);
        assert_eq!(PasswordConfig::resolve_cost(Some(" 15 "), &prod), 15);
        // 범위 밖이거나 숫자가 아니면 환경 기본값
        assert_eq!(PasswordConfig::resolve_cost(Some("3"), &prod), 12);
        assert_eq!(PasswordConfig::resolve_cost(Some("16"), &prod), 12);
        assert_eq!(PasswordConfig::resolve_cost(Some("fast"), &prod), 12);
        assert_eq!(PasswordConfig::resolve_cost(None, &Environment::Test), 4);
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("In-Memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongodb"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::from_str("postgres"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::Memory.as_str(), "memory");
    }
}
