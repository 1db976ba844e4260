//! Postgres variant of the user repository. The other entities are
//! MySQL-only; selecting the `postgres` driver serves the user routes alone.

use async_trait::async_trait;
use log::{debug, error};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::User;

use super::user_repository::UserRepository;
use super::{format_query, parse_id};

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> Result<User, sqlx::Error> {
        Ok(User {
            id: row.try_get::<i64, _>("id")?.to_string(),
            username: row.try_get("username")?,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> Result<String, sqlx::Error> {
        // "user" is reserved in Postgres, hence the quoting.
        let q = r#"INSERT INTO awesome."user" (username) VALUES ($1) RETURNING id"#;
        debug!("SQL query: {}", format_query(q));

        let row = sqlx::query(q)
            .bind(&user.username)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to insert user: {}", err);
                err
            })?;

        Ok(row.try_get::<i64, _>("id")?.to_string())
    }

    async fn find_all(&self) -> Result<Vec<User>, sqlx::Error> {
        let q = r#"SELECT id, username FROM awesome."user""#;
        debug!("SQL query: {}", format_query(q));

        let rows = sqlx::query(q).fetch_all(&self.pool).await.map_err(|err| {
            error!("failed to list users: {}", err);
            err
        })?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn find_one(&self, id: &str) -> Result<User, sqlx::Error> {
        let q = r#"SELECT id, username FROM awesome."user" WHERE id = $1"#;
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
        let q = r#"UPDATE awesome."user" SET username = $1 WHERE id = $2"#;
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
        let q = r#"DELETE FROM awesome."user" WHERE id = $1"#;
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
