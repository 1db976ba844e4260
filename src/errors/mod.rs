use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// JSON body returned for errors that carry a message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP-facing error taxonomy.
///
/// `BareBadRequest` exists because the list endpoints for auth, profile and
/// user-data answer a repository failure with an empty 400 response, while
/// the user endpoints include an error body. The asymmetry is part of the
/// service contract.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    BareBadRequest,
    NotFound(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
            ApiError::BareBadRequest => write!(f, "Bad Request"),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Internal(message) => write!(f, "Internal Server Error: {}", message),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(message) => HttpResponse::BadRequest().json(ErrorResponse {
                error: message.clone(),
            }),
            ApiError::BareBadRequest => HttpResponse::BadRequest().finish(),
            ApiError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
                error: message.clone(),
            }),
            ApiError::Internal(message) => {
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: message.clone(),
                })
            }
        }
    }
}
