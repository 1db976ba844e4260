//! UserData repository over the `user_data` table (MySQL).

use async_trait::async_trait;
use log::{debug, error};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use crate::models::UserData;

use super::{format_query, parse_id};

#[async_trait]
pub trait UserDataRepository: Send + Sync {
    /// Insert a school record and return the new row id as a decimal string.
    /// The profile create path is the one that sets `user_id`.
    async fn create(&self, user_data: &UserData) -> Result<String, sqlx::Error>;
    async fn find_all(&self) -> Result<Vec<UserData>, sqlx::Error>;
    async fn find_one(&self, user_id: &str) -> Result<UserData, sqlx::Error>;
    async fn update(&self, user_data: &UserData) -> Result<(), sqlx::Error>;
    async fn delete(&self, user_id: &str) -> Result<(), sqlx::Error>;
}

pub struct MySqlUserDataRepository {
    pool: MySqlPool,
}

impl MySqlUserDataRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &MySqlRow) -> Result<UserData, sqlx::Error> {
        Ok(UserData {
            user_id: row.try_get::<i64, _>("user_id")?.to_string(),
            school: row.try_get("school")?,
        })
    }
}

#[async_trait]
impl UserDataRepository for MySqlUserDataRepository {
    async fn create(&self, user_data: &UserData) -> Result<String, sqlx::Error> {
        let q = "INSERT INTO user_data (school) VALUES (?)";
        debug!("SQL query: {}", format_query(q));

        let result = sqlx::query(q)
            .bind(&user_data.school)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to insert user_data: {}", err);
                err
            })?;

        Ok(result.last_insert_id().to_string())
    }

    async fn find_all(&self) -> Result<Vec<UserData>, sqlx::Error> {
        let q = "SELECT user_id, school FROM user_data";
        debug!("SQL query: {}", format_query(q));

        let rows = sqlx::query(q).fetch_all(&self.pool).await.map_err(|err| {
            error!("failed to list user_data: {}", err);
            err
        })?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn find_one(&self, user_id: &str) -> Result<UserData, sqlx::Error> {
        let q = "SELECT user_id, school FROM user_data WHERE user_id = ?";
        debug!("SQL query: {}", format_query(q));

        let row = sqlx::query(q)
            .bind(parse_id(user_id)?)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to find user_data {}: {}", user_id, err);
                err
            })?;

        Self::map_row(&row)
    }

    async fn update(&self, user_data: &UserData) -> Result<(), sqlx::Error> {
        let q = "UPDATE user_data SET school = ? WHERE user_id = ?";
        debug!("SQL query: {}", format_query(q));

        sqlx::query(q)
            .bind(&user_data.school)
            .bind(parse_id(&user_data.user_id)?)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to update user_data {}: {}", user_data.user_id, err);
                err
            })?;

        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<(), sqlx::Error> {
        let q = "DELETE FROM user_data WHERE user_id = ?";
        debug!("SQL query: {}", format_query(q));

        sqlx::query(q)
            .bind(parse_id(user_id)?)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to delete user_data {}: {}", user_id, err);
                err
            })?;

        Ok(())
    }
}
