//! HTTP 서버 설정
//!
//! 바인딩 주소, 워커 수, Rate Limiting, CORS 허용 Origin 을 환경변수에서 읽습니다.
//! 파싱에 실패한 값은 에러 로그를 남기고 기본값으로 대체합니다.

use std::env;
use std::str::FromStr;

use log::error;

/// 환경변수를 읽어 파싱합니다. 없거나 파싱할 수 없으면 `default`.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().unwrap_or_else(|e| {
        error!("{} 파싱 실패: {}. 기본값 사용", key, e);
        default
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_or("PORT", 8000),
            workers: env_or("WORKERS", 4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 허용 Origin 목록
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8000",
        "http://127.0.0.1:8000",
    ];

    pub fn from_env() -> Self {
        Self::from_list(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    /// 쉼표로 구분된 목록을 파싱합니다. 비어 있으면 기본 개발용 Origin.
    pub fn from_list(raw: Option<&str>) -> Self {
        let allowed_origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Self {
                allowed_origins: Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            };
        }

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or::<u16>("PORT", "9000", 8000), 9000);
        assert_eq!(parse_or::<u16>("PORT", " 9001 ", 8000), 9001);
        assert_eq!(parse_or::<u16>("PORT", "eighty", 8000), 8000);
        assert_eq!(parse_or::<u16>("PORT", "70000", 8000), 8000);
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            workers: 2,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_cors_origins_from_list() {
        let config = CorsConfig::from_list(Some("https://a.example, https://b.example,,"));
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn test_cors_origins_default() {
        assert_eq!(CorsConfig::from_list(None).allowed_origins.len(), 4);
        assert_eq!(CorsConfig::from_list(Some(" , ")).allowed_origins.len(), 4);
    }
}
