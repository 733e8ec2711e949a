//! Application Configuration
//!
//! Configuration for the Auth application layer.

use chrono::Duration;
use platform::token::TokenConfig;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Access token signing parameters
    pub token: TokenConfig,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// How long a password-reset token stays valid
    pub reset_token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: TokenConfig {
                secret: String::new(),
                issuer: "MultiTenantApi".to_string(),
                audience: "MultiTenantApiClients".to_string(),
                lifetime_secs: 3600,
            },
            password_pepper: None,
            reset_token_ttl: Duration::hours(1),
        }
    }
}

impl AuthConfig {
    /// Create config with the well-known development signing key
    pub fn development() -> Self {
        Self {
            token: TokenConfig::development(),
            ..Default::default()
        }
    }

    /// Create config with an explicit signing secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            token: TokenConfig {
                secret: secret.into(),
                ..TokenConfig::development()
            },
            ..Default::default()
        }
    }

    #[inline]
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
