//! Change Password Use Case
//!
//! Replaces the caller's password after re-verifying the current one.

use std::sync::Arc;

use kernel::tenant::TenantContext;
use platform::password::{ClearTextPassword, PasswordPolicyError};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    /// Account to update, always resolved inside the caller's tenant
    pub username: String,
    /// Current password, re-checked even though the caller holds a token
    pub current_password: String,
    /// Replacement password
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, ctx: &TenantContext, input: ChangePasswordInput) -> AuthResult<()> {
        // The tenant comes from the verified token, never the body. The
        // lookup cannot reach accounts outside the caller's tenant.
        let mut user = self
            .user_repo
            .find_by_username(&ctx.tenant_id, input.username.trim())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let current = ClearTextPassword::new(input.current_password)
            .map_err(|_| AuthError::CurrentPasswordMismatch)?;

        let current_valid = user.password_hash.verify(&current, self.config.pepper());

        if !current_valid {
            return Err(AuthError::CurrentPasswordMismatch);
        }

        let new_password = ClearTextPassword::new(input.new_password).map_err(|e| match e {
            PasswordPolicyError::TooShort { .. } | PasswordPolicyError::EmptyOrWhitespace => {
                AuthError::PasswordTooShort
            }
            other => AuthError::Validation(other.to_string()),
        })?;

        let new_hash = new_password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        user.set_password(new_hash);
        self.user_repo.update(&user).await?;

        tracing::info!(
            user_id = %user.id,
            tenant_id = %user.tenant_id,
            "Password changed"
        );

        Ok(())
    }
}
