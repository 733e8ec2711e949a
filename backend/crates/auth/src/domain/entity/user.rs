//! User Entity

use chrono::{DateTime, Utc};
use kernel::tenant::TenantId;
use platform::password::HashedPassword;
use uuid::Uuid;

use crate::domain::value_object::{Email, Role, Username};

/// Account scoped to a single tenant.
///
/// Usernames are unique per tenant, not globally: the same username may
/// exist under different tenants as entirely unrelated accounts.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: Username,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub role: Role,
    pub tenant_id: TenantId,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new, immediately-active account.
    pub fn new(
        username: Username,
        email: Email,
        password_hash: HashedPassword,
        role: Role,
        tenant_id: TenantId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            role,
            tenant_id,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Replace the credential and stamp the modification time.
    pub fn set_password(&mut self, password_hash: HashedPassword) {
        self.password_hash = password_hash;
        self.updated_at = Some(Utc::now());
    }

    /// Deactivated accounts keep their row but cannot authenticate.
    #[inline]
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}
