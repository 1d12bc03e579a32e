//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresJournalRepository` - Journal entries
//! - `PostgresStatRepository` - Daily stat snapshots
//! - `PostgresMissionRepository` - Daily missions
//!
//! `run_migrations` applies the embedded schema under `migrations/`.

mod journal_repository;
mod mission_repository;
mod stat_repository;

pub use journal_repository::PostgresJournalRepository;
pub use mission_repository::PostgresMissionRepository;
pub use stat_repository::PostgresStatRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Opens a connection pool sized by the database config.
pub async fn connect(config: &DatabaseConfig, url: &str) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(url)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to connect to database: {}", e),
            )
        })
}

/// Applies pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to run migrations: {}", e),
        )
    })
}
