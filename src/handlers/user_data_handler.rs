//! UserData handlers. As with auth, the by-id route is a placeholder that
//! never reaches the repository.

use actix_web::{web, HttpResponse};

use crate::constants::STUB_USER_DATA_BY_ID;
use crate::errors::ApiError;
use crate::repositories::UserDataRepository;

pub async fn get_user_data_list(
    repository: web::Data<dyn UserDataRepository>,
) -> Result<HttpResponse, ApiError> {
    let records = repository
        .find_all()
        .await
        .map_err(|_| ApiError::BareBadRequest)?;

    Ok(HttpResponse::Ok().json(records))
}

pub async fn get_user_data(_path: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().body(STUB_USER_DATA_BY_ID)
}
