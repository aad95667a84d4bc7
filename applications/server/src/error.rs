/// Server error types
use crate::services::catalog::CatalogError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Input validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Storage error: {0}")]
    Storage(#[from] songbook_store::StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CatalogError> for ServerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(msg) => ServerError::NotFound(msg),
            CatalogError::InvalidInput(msg) => ServerError::BadRequest(msg),
            CatalogError::Validation(errors) => ServerError::Validation(errors),
            CatalogError::Store(err) => ServerError::Storage(err),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServerError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Not Found", "message": msg }),
            ),
            ServerError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Bad Request", "message": msg }),
            ),
            ServerError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation Failed",
                    "message": "Input validation failed",
                    "errors": errors,
                }),
            ),
            ServerError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error", "message": "An unexpected error occurred" }),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error", "message": "An unexpected error occurred" }),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error", "message": "Configuration error" }),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error", "message": "IO error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
