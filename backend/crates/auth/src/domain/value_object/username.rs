//! Username Value Object

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Maximum stored username length.
pub const MAX_USERNAME_LENGTH: usize = 100;

/// Login/display name, unique per tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate user input: trimmed, non-empty, at most 100 characters.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("El nombre de usuario es requerido."));
        }
        if trimmed.chars().count() > MAX_USERNAME_LENGTH {
            return Err(AppError::bad_request(
                "El nombre de usuario no puede exceder 100 caracteres.",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Rehydrate from a stored row without re-validating.
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
