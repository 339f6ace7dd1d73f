//! Persistence layer for the movie catalog.
//!
//! [`create_pool`] is the factory: it turns a [`DatabaseConfig`] into a
//! [`DbPool`] for the configured backend, and [`DbPool::movie_repository`]
//! hands out the matching [`MovieRepository`] implementation.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub mod config;
pub mod models;
pub mod repositories;

pub use config::{Backend, ConfigError, ConfigOverrides, DatabaseConfig};

use repositories::{MovieRepository, PgMovieRepo, SqliteMovieRepo};

/// Connection pool for whichever backend the configuration selected.
///
/// Cloning is cheap; clones share the same underlying pool.
#[derive(Debug, Clone)]
pub enum DbPool {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DbPool {
    pub fn backend(&self) -> Backend {
        match self {
            Self::Postgres(_) => Backend::Postgres,
            Self::Sqlite(_) => Backend::Sqlite,
        }
    }

    /// Build the movie repository for this pool's backend.
    pub fn movie_repository(&self) -> Arc<dyn MovieRepository> {
        match self {
            Self::Postgres(pool) => Arc::new(PgMovieRepo::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteMovieRepo::new(pool.clone())),
        }
    }

    /// Close every pooled connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
    }
}

/// Create a connection pool from the given configuration.
///
/// SQLite database files are created if missing. In-memory SQLite is held
/// on a single connection that is never recycled, since each new
/// connection would otherwise see an empty database.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = match config.backend() {
        Backend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections())
                .connect(config.url())
                .await?;
            DbPool::Postgres(pool)
        }
        Backend::Sqlite => {
            let options = SqliteConnectOptions::from_str(config.url())?.create_if_missing(true);
            let pool_options = if config.is_in_memory() {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
            } else {
                SqlitePoolOptions::new().max_connections(config.max_connections())
            };
            DbPool::Sqlite(pool_options.connect_with(options).await?)
        }
    };

    tracing::info!(backend = %pool.backend(), "Database connection pool created");
    Ok(pool)
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    match pool {
        DbPool::Postgres(pool) => {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        DbPool::Sqlite(pool) => {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
    }
    Ok(())
}

/// Apply all pending schema migrations for the pool's backend.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    match pool {
        DbPool::Postgres(pool) => sqlx::migrate!("../../db/migrations/postgres").run(pool).await,
        DbPool::Sqlite(pool) => sqlx::migrate!("../../db/migrations/sqlite").run(pool).await,
    }
}
