//! Auth repository over the `auth` table (MySQL).

use async_trait::async_trait;
use log::{debug, error};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use crate::models::Auth;

use super::{format_query, parse_id};

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Insert a credential and return the new id as a decimal string.
    async fn create(&self, auth: &Auth) -> Result<String, sqlx::Error>;
    async fn find_all(&self) -> Result<Vec<Auth>, sqlx::Error>;
    async fn find_one(&self, id: &str) -> Result<Auth, sqlx::Error>;
    async fn update(&self, auth: &Auth) -> Result<(), sqlx::Error>;
    async fn delete(&self, id: &str) -> Result<(), sqlx::Error>;
}

pub struct MySqlAuthRepository {
    pool: MySqlPool,
}

impl MySqlAuthRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &MySqlRow) -> Result<Auth, sqlx::Error> {
        Ok(Auth {
            id: row.try_get::<i64, _>("id")?.to_string(),
            api_key: row.try_get("api_key")?,
        })
    }
}

#[async_trait]
impl AuthRepository for MySqlAuthRepository {
    async fn create(&self, auth: &Auth) -> Result<String, sqlx::Error> {
        let q = "INSERT INTO auth (api_key) VALUES (?)";
        debug!("SQL query: {}", format_query(q));

        let result = sqlx::query(q)
            .bind(&auth.api_key)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to insert auth record: {}", err);
                err
            })?;

        Ok(result.last_insert_id().to_string())
    }

    async fn find_all(&self) -> Result<Vec<Auth>, sqlx::Error> {
        let q = "SELECT id, api_key FROM auth";
        debug!("SQL query: {}", format_query(q));

        let rows = sqlx::query(q).fetch_all(&self.pool).await.map_err(|err| {
            error!("failed to list auth records: {}", err);
            err
        })?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn find_one(&self, id: &str) -> Result<Auth, sqlx::Error> {
        let q = "SELECT id, api_key FROM auth WHERE id = ?";
        debug!("SQL query: {}", format_query(q));

        let row = sqlx::query(q)
            .bind(parse_id(id)?)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to find auth record {}: {}", id, err);
                err
            })?;

        Self::map_row(&row)
    }

    async fn update(&self, auth: &Auth) -> Result<(), sqlx::Error> {
        let q = "UPDATE auth SET api_key = ? WHERE id = ?";
        debug!("SQL query: {}", format_query(q));

        sqlx::query(q)
            .bind(&auth.api_key)
            .bind(parse_id(&auth.id)?)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to update auth record {}: {}", auth.id, err);
                err
            })?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), sqlx::Error> {
        let q = "DELETE FROM auth WHERE id = ?";
        debug!("SQL query: {}", format_query(q));

        sqlx::query(q)
            .bind(parse_id(id)?)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to delete auth record {}: {}", id, err);
                err
            })?;

        Ok(())
    }
}
