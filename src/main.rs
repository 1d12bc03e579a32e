//! SoulSync server binary.
//!
//! Loads configuration from the environment, picks the Entry Store and AI
//! provider, and serves the HTTP API.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use soulsync::adapters::ai::provider_from_config;
use soulsync::adapters::http::{api_router, AppState, Repositories};
use soulsync::adapters::postgres::{
    self, PostgresJournalRepository, PostgresMissionRepository, PostgresStatRepository,
};
use soulsync::application::{ChatAdvisor, ChatSettings};
use soulsync::config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig, ValidationError};
use soulsync::domain::foundation::{DomainError, UserId, ValidationError as InvalidValue};
use soulsync::domain::missions::MissionGenerator;

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("invalid user id: {0}")]
    UserId(#[from] InvalidValue),

    #[error("storage error: {0}")]
    Storage(#[from] DomainError),

    #[error("failed to bind: {0}")]
    Bind(#[from] std::io::Error),

    #[error("server error: {0}")]
    Server(String),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "SoulSync starting"
    );

    let repos = open_repositories(&config.database).await?;

    let provider = provider_from_config(&config.ai);
    if provider.is_none() {
        warn!("No AI provider key configured, chat will use fallback replies");
    }
    let advisor = ChatAdvisor::new(
        provider,
        ChatSettings {
            timeout: config.ai.timeout(),
            temperature: config.ai.temperature,
            max_tokens: config.ai.max_tokens,
        },
    );

    let state = AppState::new(
        repos,
        advisor,
        MissionGenerator::new(config.game.missions_per_day),
        UserId::new(config.game.user_id.clone())?,
        config.game.history_days,
    );

    let app = with_middleware(api_router(state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| StartupError::Server(e.to_string()))
}

/// Filter comes from `RUST_LOG`, else the configured log level.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if server.is_production() {
        fmt().with_env_filter(filter).with_target(true).json().init();
    } else {
        fmt().with_env_filter(filter).with_target(true).compact().init();
    }
}

async fn open_repositories(database: &DatabaseConfig) -> Result<Repositories, StartupError> {
    let Some(url) = database.url() else {
        info!("No database URL configured, using in-memory storage");
        return Ok(Repositories::in_memory());
    };

    let pool = postgres::connect(database, url).await?;
    if database.run_migrations {
        postgres::run_migrations(&pool).await?;
        info!("Database migrations applied");
    }

    Ok(Repositories {
        journal: Arc::new(PostgresJournalRepository::new(pool.clone())),
        stats: Arc::new(PostgresStatRepository::new(pool.clone())),
        missions: Arc::new(PostgresMissionRepository::new(pool)),
    })
}

fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let cors = if origins.is_empty() {
        if server.is_production() {
            warn!("No CORS origins configured in production");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
