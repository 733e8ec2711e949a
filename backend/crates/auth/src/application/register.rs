//! Register Use Case
//!
//! Creates a new account inside a tenant.

use std::sync::Arc;

use kernel::tenant::TenantId;
use platform::password::{ClearTextPassword, PasswordPolicyError, MIN_PASSWORD_LENGTH};

use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, Role, Username};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    /// Desired user name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Password
    pub password: String,
    /// Optional role, defaults to `User`
    pub role: Option<String>,
    /// Tenant the account belongs to
    pub tenant_id: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        // Registration happens before any session exists, so the tenant
        // comes from the request body.
        let tenant = TenantId::new(&input.tenant_id);

        let username = Username::new(&input.username)?;
        let email = Email::new(&input.email)?;
        let role = match input.role.as_deref() {
            None | Some("") => Role::default(),
            Some(code) => Role::from_code(code)
                .ok_or_else(|| AuthError::Validation("El rol no es válido.".to_string()))?,
        };

        if self
            .user_repo
            .exists_by_username(&tenant, username.as_str())
            .await?
        {
            return Err(AuthError::UsernameTaken);
        }

        let password = ClearTextPassword::new(input.password).map_err(|e| match e {
            PasswordPolicyError::TooShort { .. } | PasswordPolicyError::EmptyOrWhitespace => {
                AuthError::Validation(format!(
                    "La contraseña debe tener al menos {MIN_PASSWORD_LENGTH} caracteres."
                ))
            }
            other => AuthError::Validation(other.to_string()),
        })?;

        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(username, email, password_hash, role, tenant.clone());
        let stored = self.user_repo.create(&tenant, &user).await?;

        tracing::info!(
            user_id = %stored.id,
            username = %stored.username,
            tenant_id = %stored.tenant_id,
            role = %stored.role,
            "User registered"
        );

        Ok(stored)
    }
}
