//! PostgreSQL pool construction for the partial Postgres variant.

use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::StorageConfig;

/// Open a lazy Postgres pool and verify connectivity with the bounded
/// retry loop.
pub async fn new_client(max_attempts: u32, sc: &StorageConfig) -> Result<PgPool, sqlx::Error> {
    let dsn = super::postgres_dsn(sc);
    let pool = PgPoolOptions::new().connect_lazy(&dsn)?;

    super::ping_with_tries(&pool, max_attempts).await?;
    info!("connected to PostgreSQL at {}:{}", sc.host, sc.port);

    Ok(pool)
}
