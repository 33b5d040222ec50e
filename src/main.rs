//! 회원가입 서비스 메인 애플리케이션
//!
//! 설정을 읽고, 저장소를 준비한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::middleware::{self, TrailingSlash};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use accounts_service::config::{
    CorsConfig, DatabaseConfig, PasswordConfig, RateLimitConfig, ServerConfig, StorageBackend,
};
use accounts_service::db::Database;
use accounts_service::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use accounts_service::routes::configure_all_routes;
use accounts_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // .env 에 RUST_LOG 가 있을 수 있으므로 로거보다 먼저 로드
    let env_file_status = load_env_file();
    init_logging();

    info!("🚀 회원가입 서비스 시작중...");
    info!("{}", env_file_status);

    let user_repo = initialize_user_repository().await?;

    let bcrypt_cost = PasswordConfig::bcrypt_cost();
    info!("🔐 bcrypt cost: {}", bcrypt_cost);

    let user_service = web::Data::new(UserService::new(user_repo, bcrypt_cost));

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 적용합니다.
async fn start_http_server(user_service: web::Data<UserService>) -> io::Result<()> {
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Registration form: http://{}/", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let cors_config = CorsConfig::from_env();
    info!("CORS 허용 Origin: {:?}", cors_config.allowed_origins);

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::new(TrailingSlash::MergeOnly))
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(server_config.workers)
        .run()
        .await
}

/// PROFILE 환경변수에 따라 .env 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev (기본값)
/// * `PROFILE=prod` - .env.prod
/// * 기타 - .env
///
/// 로거 초기화 전이므로 결과를 문자열로 돌려주고 나중에 기록합니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    match dotenv::from_filename(filename) {
        Ok(_) => format!("Current profile: {} ({} 로드 됨)", profile, filename),
        Err(e) => format!("Current profile: {} ({} 로드 실패: {})", profile, filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 미설정 시 "info,actix_web=info".
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 저장소 백엔드로 사용자 리포지토리를 만들고 초기화합니다
async fn initialize_user_repository() -> io::Result<Arc<dyn UserRepository>> {
    let backend = StorageBackend::from_env();
    info!("📡 저장소 준비 중: {}", backend.as_str());

    let user_repo: Arc<dyn UserRepository> = match backend {
        StorageBackend::MongoDb => {
            let database = Database::connect(&DatabaseConfig::from_env())
                .await
                .map_err(|e| {
                    error!("❌ MongoDB 연결 실패: {}", e);
                    io::Error::other(e)
                })?;

            Arc::new(MongoUserRepository::new(Arc::new(database)))
        }
        StorageBackend::Memory => {
            info!("⚠️ 메모리 저장소 사용: 재시작 시 데이터가 사라집니다");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    user_repo.init().await.map_err(|e| {
        error!("❌ 저장소 초기화 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("✅ 저장소 준비 완료: {}", user_repo.name());
    Ok(user_repo)
}

/// CORS 설정을 구성합니다
fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-csrftoken"),
        ])
        .max_age(3600)
}
