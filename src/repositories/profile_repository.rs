//! Profile repository: denormalized reads across `user`, `user_profile`
//! and `user_data`, plus the one write path that spans all three tables.

use async_trait::async_trait;
use log::{debug, error};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use crate::models::Profile;

use super::{format_query, parse_id};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert the user, profile and data rows for a new profile and return
    /// the new user id as a decimal string.
    async fn create(&self, profile: &Profile) -> Result<String, sqlx::Error>;
    async fn find_all(&self) -> Result<Vec<Profile>, sqlx::Error>;
    /// Profiles are looked up by username, not by id.
    async fn find_one(&self, username: &str) -> Result<Profile, sqlx::Error>;
    async fn update(&self, profile: &Profile) -> Result<(), sqlx::Error>;
    async fn delete(&self, user_id: &str) -> Result<(), sqlx::Error>;
}

pub struct MySqlProfileRepository {
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &MySqlRow) -> Result<Profile, sqlx::Error> {
        Ok(Profile {
            user_id: row.try_get("user_id")?,
            username: row.try_get("username")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            phone: row.try_get("phone")?,
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            school: row.try_get("school")?,
        })
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn create(&self, profile: &Profile) -> Result<String, sqlx::Error> {
        // All three inserts commit or none do; the user id links them.
        let mut tx = self.pool.begin().await.map_err(|err| {
            error!("failed to begin profile transaction: {}", err);
            err
        })?;

        let q = "INSERT INTO user (username) VALUES (?)";
        debug!("SQL query: {}", format_query(q));
        let result = sqlx::query(q)
            .bind(&profile.username)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("failed to insert user for profile: {}", err);
                err
            })?;
        let user_id = result.last_insert_id();

        let q = "INSERT INTO user_profile (user_id, first_name, last_name, phone, address, city) \
                 VALUES (?, ?, ?, ?, ?, ?)";
        debug!("SQL query: {}", format_query(q));
        sqlx::query(q)
            .bind(user_id)
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.phone)
            .bind(&profile.address)
            .bind(&profile.city)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("failed to insert user_profile: {}", err);
                err
            })?;

        let q = "INSERT INTO user_data (user_id, school) VALUES (?, ?)";
        debug!("SQL query: {}", format_query(q));
        sqlx::query(q)
            .bind(user_id)
            .bind(&profile.school)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("failed to insert user_data: {}", err);
                err
            })?;

        tx.commit().await.map_err(|err| {
            error!("failed to commit profile transaction: {}", err);
            err
        })?;

        Ok(user_id.to_string())
    }

    async fn find_all(&self) -> Result<Vec<Profile>, sqlx::Error> {
        let q = "SELECT user.username, user_profile.user_id, user_profile.first_name,
                        user_profile.last_name, user_profile.phone, user_profile.address,
                        user_profile.city, user_data.school
                 FROM user
                 JOIN user_profile ON user.id = user_profile.user_id
                 JOIN user_data ON user.id = user_data.user_id";
        debug!("SQL query: {}", format_query(q));

        let rows = sqlx::query(q).fetch_all(&self.pool).await.map_err(|err| {
            error!("failed to list profiles: {}", err);
            err
        })?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn find_one(&self, username: &str) -> Result<Profile, sqlx::Error> {
        let q = "SELECT user.username, user_profile.user_id, user_profile.first_name,
                        user_profile.last_name, user_profile.phone, user_profile.address,
                        user_profile.city, user_data.school
                 FROM user
                 JOIN user_profile ON user.id = user_profile.user_id
                 JOIN user_data ON user.id = user_data.user_id
                 WHERE user.username = ?";
        debug!("SQL query: {}", format_query(q));

        let row = sqlx::query(q)
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to find profile for {}: {}", username, err);
                err
            })?;

        Self::map_row(&row)
    }

    async fn update(&self, profile: &Profile) -> Result<(), sqlx::Error> {
        let q = "UPDATE user_profile SET first_name = ?, last_name = ?, phone = ?, \
                 address = ?, city = ? WHERE user_id = ?";
        debug!("SQL query: {}", format_query(q));

        sqlx::query(q)
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.phone)
            .bind(&profile.address)
            .bind(&profile.city)
            .bind(profile.user_id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to update profile {}: {}", profile.user_id, err);
                err
            })?;

        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<(), sqlx::Error> {
        let q = "DELETE FROM user_profile WHERE user_id = ?";
        debug!("SQL query: {}", format_query(q));

        sqlx::query(q)
            .bind(parse_id(user_id)?)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to delete profile {}: {}", user_id, err);
                err
            })?;

        Ok(())
    }
}
