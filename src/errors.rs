use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::api::ApiErrorResponse;

#[derive(Debug)]
pub enum AppError {
    /// Input failed shape/length checks. Raised before any store access.
    Validation(Vec<String>),
    /// The title UNIQUE constraint rejected a create.
    DuplicateTitle,
    /// No presentation with the given title at operation time.
    NotFound,
    /// Slide index malformed or outside the current slide list.
    Index,
    /// Any other database failure. Not retried.
    Storage(sqlx::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => {
                write!(f, "Validation failed: {}", errors.join("; "))
            }
            AppError::DuplicateTitle => {
                write!(f, "The presentation with the given title already exists")
            }
            AppError::NotFound => {
                write!(f, "The presentation with the given title was not found")
            }
            AppError::Index => write!(f, "The slide with the given index was not found"),
            AppError::Storage(e) => write!(f, "Storage error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => HttpResponse::BadRequest().json(ApiErrorResponse {
                error: "Validation failed".to_string(),
                details: Some(errors.join("; ")),
            }),
            AppError::DuplicateTitle => HttpResponse::Conflict().json(ApiErrorResponse {
                error: self.to_string(),
                details: None,
            }),
            AppError::NotFound | AppError::Index => HttpResponse::NotFound().json(ApiErrorResponse {
                error: self.to_string(),
                details: None,
            }),
            AppError::Storage(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(ApiErrorResponse {
                    error: "Internal server error".to_string(),
                    details: None,
                })
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Storage(e)
    }
}
