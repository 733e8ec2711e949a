//! Products Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::error::kind::ErrorKind;
use thiserror::Error;

pub type ProductResult<T> = Result<T, ProductError>;

/// Product module errors
#[derive(Debug, Error)]
pub enum ProductError {
    /// Product does not exist within the caller's tenant. A product
    /// belonging to another tenant reports the same error.
    #[error("Producto no encontrado.")]
    NotFound,

    /// Input failed validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProductError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::NotFound => ErrorKind::NotFound,
            ProductError::Validation(_) => ErrorKind::BadRequest,
            ProductError::Database(_) | ProductError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError for the unified response shape
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProductError::Database(_) | ProductError::Internal(_) => AppError::new(
                self.kind(),
                "Ha ocurrido un error interno. Intente nuevamente más tarde.",
            ),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log with appropriate severity
    pub fn log(&self) {
        match self {
            ProductError::Database(e) => {
                tracing::error!(error = %e, "Product database error");
            }
            ProductError::Internal(msg) => {
                tracing::error!(error = %msg, "Product internal error");
            }
            other => {
                tracing::debug!(error = %other, "Product request rejected");
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(ProductError::NotFound.kind().status_code(), 404);
    }

    #[test]
    fn test_database_error_message_is_generic() {
        let err = ProductError::Database(sqlx::Error::PoolTimedOut);
        let app = err.to_app_error();
        assert!(!app.message().contains("PoolTimedOut"));
    }
}
