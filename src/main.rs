mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::config::{Driver, ListenConfig, ListenKind, CONFIG};
use crate::repositories::{
    AuthRepository, MySqlAuthRepository, MySqlProfileRepository, MySqlUserDataRepository,
    MySqlUserRepository, PgUserRepository, ProfileRepository, UserDataRepository, UserRepository,
};

const CONNECT_ATTEMPTS: u32 = 3;
const CLIENT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match CONFIG.storage.driver {
        Driver::MySql => serve_mysql().await,
        Driver::Postgres => serve_postgres().await,
    }
}

async fn serve_mysql() -> std::io::Result<()> {
    info!("Connecting to MySQL...");
    let pool = db::mysql::new_client(CONNECT_ATTEMPTS, &CONFIG.storage)
        .await
        .expect("failed to connect to MySQL");

    let user_repo: Arc<dyn UserRepository> = Arc::new(MySqlUserRepository::new(pool.clone()));
    let auth_repo: Arc<dyn AuthRepository> = Arc::new(MySqlAuthRepository::new(pool.clone()));
    let profile_repo: Arc<dyn ProfileRepository> =
        Arc::new(MySqlProfileRepository::new(pool.clone()));
    let user_data_repo: Arc<dyn UserDataRepository> =
        Arc::new(MySqlUserDataRepository::new(pool));

    let user_repo = web::Data::from(user_repo);
    let auth_repo = web::Data::from(auth_repo);
    let profile_repo = web::Data::from(profile_repo);
    let user_data_repo = web::Data::from(user_data_repo);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_repo.clone())
            .app_data(auth_repo.clone())
            .app_data(profile_repo.clone())
            .app_data(user_data_repo.clone())
            .configure(routes::configure_routes)
    })
    .client_request_timeout(CLIENT_REQUEST_TIMEOUT);

    let server = match select_listener(&CONFIG.listen)? {
        Listener::Tcp(addr) => {
            info!("Server is listening on {}", addr);
            server.bind(addr)?
        }
        Listener::Unix(path) => {
            info!("Server is listening on unix socket: {}", path.display());
            server.bind_uds(path)?
        }
    };

    server.run().await
}

async fn serve_postgres() -> std::io::Result<()> {
    info!("Connecting to PostgreSQL...");
    let pool = db::postgres::new_client(CONNECT_ATTEMPTS, &CONFIG.storage)
        .await
        .expect("failed to connect to PostgreSQL");

    let user_repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));
    let user_repo = web::Data::from(user_repo);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_repo.clone())
            .configure(routes::configure_user_routes)
    })
    .client_request_timeout(CLIENT_REQUEST_TIMEOUT);

    let server = match select_listener(&CONFIG.listen)? {
        Listener::Tcp(addr) => {
            info!("Server is listening on {}", addr);
            server.bind(addr)?
        }
        Listener::Unix(path) => {
            info!("Server is listening on unix socket: {}", path.display());
            server.bind_uds(path)?
        }
    };

    server.run().await
}

/// Where the server should accept connections, resolved from config.
#[derive(Debug, PartialEq, Eq)]
enum Listener {
    Tcp(String),
    Unix(PathBuf),
}

/// Socket mode binds a Unix socket named `app.sock` next to the executable;
/// port mode binds `BIND_IP:PORT`.
fn select_listener(listen: &ListenConfig) -> std::io::Result<Listener> {
    match listen.kind {
        ListenKind::Sock => {
            let app_dir = std::env::current_exe()?
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            Ok(Listener::Unix(app_dir.join("app.sock")))
        }
        ListenKind::Port => Ok(Listener::Tcp(format!("{}:{}", listen.bind_ip, listen.port))),
    }
}
