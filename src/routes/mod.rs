//! Route registration. The repositories the handlers pull from `app_data`
//! are injected in `main`.
//!
//! Update and Delete exist on every repository but are intentionally not
//! routed; the HTTP surface only exposes reads plus the profile create.

use actix_web::{web, HttpResponse};

use crate::handlers;

/// Full route set, backed by the MySQL repositories.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/user", web::get().to(handlers::get_users_list))
        .route("/user/{id}", web::get().to(handlers::get_user))
        .route("/auth", web::get().to(handlers::get_auths_list))
        .route("/auth/{id}", web::get().to(handlers::get_auth))
        .route("/profile", web::get().to(handlers::get_profiles_list))
        .route("/profile/create", web::post().to(handlers::create_profile))
        .route("/profile/{username}", web::get().to(handlers::get_profile))
        .route("/user-data", web::get().to(handlers::get_user_data_list))
        .route("/user-data/{user_id}", web::get().to(handlers::get_user_data));
}

/// User routes only, for the Postgres driver: the other entities have no
/// Postgres repository.
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/user", web::get().to(handlers::get_users_list))
        .route("/user/{id}", web::get().to(handlers::get_user));
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}
