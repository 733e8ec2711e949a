//! Forgot Password Use Case
//!
//! Records a reset request and "sends" the email. The response never
//! reveals whether the address exists.

use std::sync::Arc;

use platform::token::generate_reset_token;

use crate::application::config::AuthConfig;
use crate::domain::entity::PasswordResetRequest;
use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::error::AuthResult;

/// Fixed response for every forgot-password call, hit or miss.
pub const RESET_INSTRUCTIONS_MESSAGE: &str =
    "Si el correo/usuario existe, recibirá instrucciones para restablecer su contraseña.";

/// Forgot password input
pub struct ForgotPasswordInput {
    /// Email the account was registered with
    pub username_or_email: String,
}

/// Forgot password use case
pub struct ForgotPasswordUseCase<U, P>
where
    U: UserRepository,
    P: PasswordResetRepository,
{
    user_repo: Arc<U>,
    reset_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<U, P> ForgotPasswordUseCase<U, P>
where
    U: UserRepository,
    P: PasswordResetRepository,
{
    pub fn new(user_repo: Arc<U>, reset_repo: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            reset_repo,
            config,
        }
    }

    /// Always returns `RESET_INSTRUCTIONS_MESSAGE` on success so callers
    /// cannot probe for registered addresses.
    pub async fn execute(&self, input: ForgotPasswordInput) -> AuthResult<&'static str> {
        let lookup = input.username_or_email.trim().to_lowercase();

        let Some(user) = self.user_repo.find_by_email_any_tenant(&lookup).await? else {
            tracing::warn!("Password reset requested for unknown address");
            return Ok(RESET_INSTRUCTIONS_MESSAGE);
        };

        let request = PasswordResetRequest::new(
            user.username.as_str(),
            user.email.as_str(),
            generate_reset_token(),
            self.config.reset_token_ttl,
        );
        self.reset_repo.create(&request).await?;

        // Mail delivery is out of scope; the token lands in the log so
        // the flow stays testable end to end.
        tracing::info!(
            email = %request.email,
            username = %request.username,
            reset_token = %request.reset_token,
            expires_at = %request.expires_at,
            "[SIMULATED EMAIL] Password reset email sent"
        );

        Ok(RESET_INSTRUCTIONS_MESSAGE)
    }
}
