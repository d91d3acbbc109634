use crate::models::message::ErrorResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Failures raised by a [`MessageStore`](crate::store::MessageStore)
/// implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("connection attempt timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid status message: {0}")]
    InvalidRecord(String),
}

/// # Status Endpoint Errors
///
/// The two failure outcomes of the public message endpoint. The display text
/// is the exact body sent to the caller, so the underlying store error is
/// only reachable through [`std::error::Error::source`] and server logs.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Service Unavailable: MongoDB connection failed or not ready.")]
    Unavailable,

    #[error("Failed to fetch data from MongoDB Atlas.")]
    Store(#[source] StoreError),
}

impl ResponseError for StatusError {
    fn status_code(&self) -> StatusCode {
        match self {
            StatusError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            StatusError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}
