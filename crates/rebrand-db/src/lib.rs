//! External resource store for the case-study API.
//!
//! The pool is opened at startup and released at shutdown through
//! [`ResourceLifecycle`]. No route reads from or writes to it.

pub mod lifecycle;

use std::{str::FromStr, time::Duration};

use rebrand_core::AppConfig;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use thiserror::Error;

pub use lifecycle::{LifecycleError, LifecycleState, ResourceHandle, ResourceLifecycle};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl PoolConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
            acquire_timeout_secs: config.db_acquire_timeout_secs,
        }
    }
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

/// Connect to a Postgres pool using an explicit URL, database name and config.
///
/// `database_name` overrides whatever database the URL names.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the URL cannot be parsed or the connection
/// cannot be established.
pub async fn connect_pool(
    database_url: &str,
    database_name: &str,
    config: PoolConfig,
) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.database(database_name);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
}

/// Connect the pool described by `config` and move the lifecycle to `Open`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] when the connection fails, or
/// [`DbError::Lifecycle`] when the lifecycle was already opened or closed.
pub async fn open_resources(
    lifecycle: &ResourceLifecycle<PgPool>,
    config: &AppConfig,
) -> Result<(), DbError> {
    let pool = connect_pool(
        &config.database_url,
        &config.database_name,
        PoolConfig::from_app_config(config),
    )
    .await?;

    if let Err(e) = lifecycle.open(pool.clone()).await {
        pool.close().await;
        return Err(e.into());
    }

    tracing::info!(database = %config.database_name, "resource store connected");
    Ok(())
}

impl ResourceHandle for PgPool {
    async fn close(&self) {
        sqlx::Pool::close(self).await;
    }
}
