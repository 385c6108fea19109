mod transaction_repo;

use crate::transaction_repo::TransactionRepo;
use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub use transaction_repo::SQLxTransactionRepo;

pub async fn create_pool(
    database_url: &str,
    max_pool_size: u32,
) -> Result<SqlitePool, anyhow::Error> {
    let connect_options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url: {}", database_url))?
        .create_if_missing(true);

    // An in-memory database lives only as long as one of its connections, so
    // pooled connections are never reaped.
    let pool = SqlitePoolOptions::new()
        .max_connections(max_pool_size)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(connect_options)
        .await
        .with_context(|| format!("Unable to connect to {}", database_url))?;

    info!("Running migrations");
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Unable to run migrations")?;

    Ok(pool)
}

pub async fn create_repo(
    database_url: &str,
    max_pool_size: u32,
) -> Result<Arc<dyn TransactionRepo>, anyhow::Error> {
    let pool = create_pool(database_url, max_pool_size).await?;
    Ok(Arc::new(SQLxTransactionRepo::new(pool)))
}
