//! Repository Interfaces
//!
//! Every tenant-scoped query takes the tenant explicitly. There is no
//! ambient tenant filter: a caller that omits the tenant does not
//! compile, and a forged tenant in an entity is overwritten on insert.

use kernel::tenant::TenantId;

use crate::domain::entity::{PasswordResetRequest, User};
use crate::error::AuthResult;

/// Persistence boundary for [`User`].
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Look up a user by username within one tenant.
    async fn find_by_username(
        &self,
        tenant: &TenantId,
        username: &str,
    ) -> AuthResult<Option<User>>;

    /// Look up a user by email across all tenants.
    ///
    /// Password-reset requests identify the account by address alone,
    /// before any tenant is established.
    async fn find_by_email_any_tenant(&self, email: &str) -> AuthResult<Option<User>>;

    /// Whether a username is already taken within one tenant.
    async fn exists_by_username(&self, tenant: &TenantId, username: &str) -> AuthResult<bool>;

    /// Insert a user under `tenant`. The entity's own `tenant_id` is
    /// ignored; the stored row always carries the explicit parameter.
    async fn create(&self, tenant: &TenantId, user: &User) -> AuthResult<User>;

    /// Persist mutable fields (credential, activity flag) of an
    /// existing user.
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Persistence boundary for [`PasswordResetRequest`].
#[trait_variant::make(PasswordResetRepository: Send)]
pub trait LocalPasswordResetRepository {
    /// Record a reset request.
    async fn create(&self, request: &PasswordResetRequest) -> AuthResult<()>;

    /// Remove used or expired requests, returning how many were deleted.
    async fn delete_expired(&self) -> AuthResult<u64>;
}
