//! Login Use Case
//!
//! Authenticates a user within a tenant and issues an access token.

use std::sync::Arc;

use kernel::tenant::TenantId;
use platform::password::ClearTextPassword;
use platform::token::issue_access_token;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    /// User name (unique per tenant)
    pub username: String,
    /// Password
    pub password: String,
    /// Tenant the credentials belong to
    pub tenant_id: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed access token
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // No session exists yet, so the tenant comes from the request body.
        let tenant = TenantId::new(&input.tenant_id);

        let user = self
            .user_repo
            .find_by_username(&tenant, input.username.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        let password_valid = user.password_hash.verify(&password, self.config.pepper());

        if !password_valid {
            tracing::warn!(
                username = %user.username,
                tenant_id = %tenant,
                "Login rejected: wrong password"
            );
            return Err(AuthError::InvalidCredentials);
        }

        if !user.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        let token = issue_access_token(
            user.id,
            user.username.as_str(),
            user.role.code(),
            user.tenant_id.as_str(),
            &self.config.token,
        )
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            tenant_id = %user.tenant_id,
            "User logged in"
        );

        Ok(LoginOutput { token })
    }
}
