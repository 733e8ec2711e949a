//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. All failures surface on the wire as
//! `{"success": false, "message": ...}` with the mapped status code.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user or wrong password, deliberately indistinguishable
    #[error("Credenciales inválidas.")]
    InvalidCredentials,

    /// Account exists but is deactivated
    #[error("Usuario desactivado.")]
    AccountDisabled,

    /// User not found (password change within the context tenant)
    #[error("Usuario no encontrado.")]
    UserNotFound,

    /// Current password did not verify during a password change
    #[error("La contraseña actual es incorrecta.")]
    CurrentPasswordMismatch,

    /// New password below the 6-character minimum
    #[error("La nueva contraseña debe tener al menos 6 caracteres.")]
    PasswordTooShort,

    /// Duplicate (username, tenant) pair at registration
    #[error("El nombre de usuario ya existe en este tenant.")]
    UsernameTaken,

    /// Request body failed domain validation
    #[error("{0}")]
    Validation(String),

    /// Bearer token missing on a protected route
    #[error("Token de autenticación requerido.")]
    MissingToken,

    /// Bearer token failed signature/issuer/audience/lifetime checks
    #[error("Token inválido o expirado.")]
    TokenInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::AccountDisabled
            | AuthError::MissingToken
            | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::CurrentPasswordMismatch
            | AuthError::PasswordTooShort
            | AuthError::UsernameTaken
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError for the unified response shape
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => AppError::new(
                self.kind(),
                "Ha ocurrido un error interno. Intente nuevamente más tarde.",
            ),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountDisabled => {
                tracing::warn!("Login attempt on disabled account");
            }
            AuthError::TokenInvalid | AuthError::MissingToken => {
                tracing::warn!("Rejected request without valid bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            ErrorKind::NotFound => AuthError::UserNotFound,
            ErrorKind::Unauthorized => AuthError::InvalidCredentials,
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired | TokenError::Invalid(_) => AuthError::TokenInvalid,
            TokenError::Crypto(msg) => AuthError::Internal(msg),
        }
    }
}
