//! MySQL pool construction.

use log::info;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::StorageConfig;

/// Open a lazy MySQL pool and verify connectivity with the bounded
/// retry loop.
pub async fn new_client(max_attempts: u32, sc: &StorageConfig) -> Result<MySqlPool, sqlx::Error> {
    let dsn = super::mysql_dsn(sc);
    let pool = MySqlPoolOptions::new().connect_lazy(&dsn)?;

    super::ping_with_tries(&pool, max_attempts).await?;
    info!("connected to MySQL at {}:{}", sc.host, sc.port);

    Ok(pool)
}
