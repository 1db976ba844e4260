//! Environment-driven application configuration.

use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen: ListenConfig,
    pub storage: StorageConfig,
}

/// How the HTTP server should accept connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenKind {
    /// Bind a TCP socket on `BIND_IP:PORT`.
    Port,
    /// Bind a Unix domain socket next to the executable.
    Sock,
}

#[derive(Debug, Clone)]
pub struct ListenConfig {
    pub kind: ListenKind,
    pub bind_ip: String,
    pub port: u16,
}

/// Which SQL backend the repositories run against.
///
/// Only the user repository has a Postgres implementation, so selecting
/// `postgres` serves the user routes alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Driver {
    MySql,
    Postgres,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub driver: Driver,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            listen: ListenConfig {
                kind: match env::var("LISTEN_TYPE").as_deref() {
                    Ok("sock") => ListenKind::Sock,
                    _ => ListenKind::Port,
                },
                bind_ip: env::var("BIND_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
            },
            storage: StorageConfig {
                driver: match env::var("DB_DRIVER").as_deref() {
                    Ok("postgres") => Driver::Postgres,
                    _ => Driver::MySql,
                },
                host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("DB_PORT")
                    .unwrap_or_else(|_| "3306".to_string())
                    .parse()
                    .expect("DB_PORT must be a valid number"),
                username: env::var("DB_USERNAME").unwrap_or_else(|_| "root".to_string()),
                password: env::var("DB_PASSWORD").unwrap_or_default(),
                database: env::var("DB_NAME").unwrap_or_else(|_| "awesome".to_string()),
            },
        }
    }
}
