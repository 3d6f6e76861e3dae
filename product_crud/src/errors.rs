// product_crud/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::web::envelope::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
  /// Malformed or missing input. The message is returned to the client as-is.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// Engine failure. Only `message` reaches the client; `source` is logged.
  #[error("Storage Error: {message}: {source}")]
  Storage {
    message: String,
    #[source]
    source: sqlx::Error,
  },

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl AppError {
  /// Builds a `map_err` adapter that wraps a `sqlx::Error` with a client-safe message.
  pub fn storage(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |source| AppError::Storage {
      message: message.to_string(),
      source,
    }
  }

  fn client_message(&self) -> &str {
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => m,
      AppError::Storage { message, .. } => message,
      AppError::Config(_) => "Internal server error",
    }
  }
}

impl From<sqlx::Error> for AppError {
  fn from(source: sqlx::Error) -> Self {
    AppError::Storage {
      message: "Database operation failed".to_string(),
      source,
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Storage { .. } | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(_) | AppError::NotFound(_) => {
        tracing::warn!(application_error = %self, "Rejecting request");
      }
      AppError::Storage { source, .. } => {
        tracing::error!(application_error = %self, sqlx_error = ?source, "Responding with storage error");
      }
      AppError::Config(_) => {
        tracing::error!(application_error = %self, "Responding with configuration error");
      }
    }
    Envelope::<()>::without_data(self.status_code(), self.client_message()).into_response()
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn storage_errors_hide_engine_detail() {
    let err = AppError::storage("Failed to create product")(sqlx::Error::PoolClosed);
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.client_message(), "Failed to create product");
    assert!(err.to_string().contains("pool"), "source stays in Display for logs: {}", err);
  }

  #[test]
  fn from_sqlx_uses_generic_message() {
    let err: AppError = sqlx::Error::RowNotFound.into();
    assert_eq!(err.client_message(), "Database operation failed");
  }

  #[test]
  fn status_codes_follow_error_kind() {
    assert_eq!(
      AppError::Validation("Invalid JSON".into()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      AppError::NotFound("Product not found".into()).status_code(),
      StatusCode::NOT_FOUND
    );
    let config = AppError::Config("Invalid SERVER_PORT".into());
    assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(config.client_message(), "Internal server error");
  }
}
