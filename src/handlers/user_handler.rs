//! User handlers: list all users and fetch one by id.

use actix_web::{web, HttpResponse};
use log::{debug, warn};

use crate::constants::MSG_USER_NOT_FOUND;
use crate::errors::ApiError;
use crate::repositories::UserRepository;

pub async fn get_users_list(
    repository: web::Data<dyn UserRepository>,
) -> Result<HttpResponse, ApiError> {
    let users = repository
        .find_all()
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let body =
        serde_json::to_string(&users).map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

pub async fn get_user(
    repository: web::Data<dyn UserRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = repository.find_one(&user_id).await.map_err(|err| match err {
        sqlx::Error::RowNotFound => {
            warn!("User not found with id: {}", user_id);
            ApiError::NotFound(MSG_USER_NOT_FOUND.to_string())
        }
        other => ApiError::BadRequest(other.to_string()),
    })?;

    let body = serde_json::to_string(&user).map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}
