//! Repository layer: one trait per entity, each backed by a SQL
//! implementation that builds a fixed parameterized statement, executes it,
//! and logs and forwards errors unchanged. No retries, no query-level
//! timeouts.

pub mod auth_repository;
pub mod pg_user_repository;
pub mod profile_repository;
pub mod user_repository;
pub mod user_data_repository;

pub use auth_repository::{AuthRepository, MySqlAuthRepository};
pub use pg_user_repository::PgUserRepository;
pub use profile_repository::{MySqlProfileRepository, ProfileRepository};
pub use user_repository::{MySqlUserRepository, UserRepository};
pub use user_data_repository::{MySqlUserDataRepository, UserDataRepository};

/// Collapse statement literals onto one line for logging.
pub(crate) fn format_query(q: &str) -> String {
    q.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Identifiers are opaque strings at the API boundary and integers in the
/// database. An id that does not parse behaves like a missing row.
pub(crate) fn parse_id(id: &str) -> Result<i64, sqlx::Error> {
    id.parse().map_err(|_| sqlx::Error::RowNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_query_collapses_whitespace() {
        let q = "SELECT id, username\n\tFROM user\n\tWHERE id = ?";
        assert_eq!(format_query(q), "SELECT id, username FROM user WHERE id = ?");
    }

    #[test]
    fn test_parse_id_numeric() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_garbage_is_not_found() {
        assert!(matches!(parse_id("abc"), Err(sqlx::Error::RowNotFound)));
        assert!(matches!(parse_id(""), Err(sqlx::Error::RowNotFound)));
    }
}
