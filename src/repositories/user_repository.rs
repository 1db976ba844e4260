//! User repository over the `user` table (MySQL).

use async_trait::async_trait;
use log::{debug, error};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use crate::models::User;

use super::{format_query, parse_id};

/// Data-access contract for the User entity. Implemented by exactly one
/// backing store per database driver.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the new id as a decimal string.
    async fn create(&self, user: &User) -> Result<String, sqlx::Error>;
    async fn find_all(&self) -> Result<Vec<User>, sqlx::Error>;
    async fn find_one(&self, id: &str) -> Result<User, sqlx::Error>;
    async fn update(&self, user: &User) -> Result<(), sqlx::Error>;
    async fn delete(&self, id: &str) -> Result<(), sqlx::Error>;
}

pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &MySqlRow) -> Result<User, sqlx::Error> {
        Ok(User {
            id: row.try_get::<i64, _>("id")?.to_string(),
            username: row.try_get("username")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: &User) -> Result<String, sqlx::Error> {
        let q = "INSERT INTO user (username) VALUES (?)";
        debug!("SQL query: {}", format_query(q));

        let result = sqlx::query(q)
            .bind(&user.username)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to insert user: {}", err);
                err
            })?;

        Ok(result.last_insert_id().to_string())
    }

    async fn find_all(&self) -> Result<Vec<User>, sqlx::Error> {
        let q = "SELECT id, username FROM user";
        debug!("SQL query: {}", format_query(q));

        let rows = sqlx::query(q).fetch_all(&self.pool).await.map_err(|err| {
            error!("failed to list users: {}", err);
            err
        })?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn find_one(&self, id: &str) -> Result<User, sqlx::Error> {
        let q = "SELECT id, username FROM user WHERE id = ?";
        debug!("SQL query: {}", format_query(q));

        let row = sqlx::query(q)
            .bind(parse_id(id)?)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to find user {}: {}", id, err);
                err
            })?;

        Self::map_row(&row)
    }

    async fn update(&self, user: &User) -> Result<(), sqlx::Error> {
        let q = "UPDATE user SET username = ? WHERE id = ?";
        debug!("SQL query: {}", format_query(q));

        sqlx::query(q)
            .bind(&user.username)
            .bind(parse_id(&user.id)?)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to update user {}: {}", user.id, err);
                err
            })?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), sqlx::Error> {
        let q = "DELETE FROM user WHERE id = ?";
        debug!("SQL query: {}", format_query(q));

        sqlx::query(q)
            .bind(parse_id(id)?)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to delete user {}: {}", id, err);
                err
            })?;

        Ok(())
    }
}
