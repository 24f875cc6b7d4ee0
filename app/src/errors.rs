// app/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use shopcore::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Invalid Operation: {0}")]
  InvalidOperation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Unexpected Error: {0}")]
  Unexpected(String),

  #[error("Store Error: {source}")]
  Store {
    #[from] // Allows conversion from shopcore::StoreError
    source: StoreError,
  },
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::InvalidOperation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Unexpected(m) => {
        HttpResponse::BadGateway().json(json!({"error": "Upstream processing error", "detail": m}))
      }
      AppError::Store { source } => {
        tracing::error!(store_error_source = ?source, "Store error details");
        HttpResponse::InternalServerError().json(json!({"error": "Store operation failed"}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
