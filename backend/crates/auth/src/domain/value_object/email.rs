//! Email Value Object

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Maximum stored email length.
pub const MAX_EMAIL_LENGTH: usize = 200;

/// Contact address used for password-reset delivery.
///
/// Stored lowercased so the global lookup-by-email is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("El email es requerido."));
        }
        if trimmed.chars().count() > MAX_EMAIL_LENGTH {
            return Err(AppError::bad_request(
                "El email no puede exceder 200 caracteres.",
            ));
        }
        // Structural check only: local@domain with a dot in the domain.
        let valid = match trimmed.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        };
        if !valid {
            return Err(AppError::bad_request("El formato del email no es válido."));
        }

        Ok(Self(trimmed.to_lowercase()))
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

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_is_lowercased() {
        let email = Email::new("Admin@TenantA.com").unwrap();
        assert_eq!(email.as_str(), "admin@tenanta.com");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("@tenanta.com").is_err());
        assert!(Email::new("admin@nodot").is_err());
        assert!(Email::new("").is_err());
    }
}
