//! PostgreSQL Repository Implementations
//!
//! Every statement on a tenant-scoped table carries a `tenant_id`
//! predicate or bind taken from the explicit parameter, never from the
//! entity alone.

use chrono::{DateTime, Utc};
use kernel::tenant::TenantId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{PasswordResetRequest, User};
use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::domain::value_object::{Email, Role, Username};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn find_by_username(
        &self,
        tenant: &TenantId,
        username: &str,
    ) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                tenant_id,
                username,
                email,
                password_hash,
                role,
                is_active,
                created_at,
                updated_at
            FROM users
            WHERE tenant_id = $1 AND username = $2
            "#,
        )
        .bind(tenant.as_str())
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email_any_tenant(&self, email: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                tenant_id,
                username,
                email,
                password_hash,
                role,
                is_active,
                created_at,
                updated_at
            FROM users
            WHERE lower(email) = lower($1)
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_username(&self, tenant: &TenantId, username: &str) -> AuthResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE tenant_id = $1 AND username = $2)",
        )
        .bind(tenant.as_str())
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, tenant: &TenantId, user: &User) -> AuthResult<User> {
        // The explicit tenant wins over whatever the entity carries.
        sqlx::query(
            r#"
            INSERT INTO users (
                id,
                tenant_id,
                username,
                email,
                password_hash,
                role,
                is_active,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.id)
        .bind(tenant.as_str())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.role.code())
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        let mut stored = user.clone();
        stored.tenant_id = tenant.clone();
        Ok(stored)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                password_hash = $3,
                is_active = $4,
                updated_at = $5
            WHERE tenant_id = $1 AND id = $2
            "#,
        )
        .bind(user.tenant_id.as_str())
        .bind(user.id)
        .bind(user.password_hash.as_phc_string())
        .bind(user.is_active)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Password Reset Repository Implementation
// ============================================================================

impl PasswordResetRepository for PgAuthRepository {
    async fn create(&self, request: &PasswordResetRequest) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO password_reset_requests (
                id,
                username,
                email,
                reset_token,
                requested_at,
                expires_at,
                used
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(request.id)
        .bind(&request.username)
        .bind(&request.email)
        .bind(&request.reset_token)
        .bind(request.requested_at)
        .bind(request.expires_at)
        .bind(request.used)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_expired(&self) -> AuthResult<u64> {
        let deleted =
            sqlx::query("DELETE FROM password_reset_requests WHERE used OR expires_at < $1")
                .bind(Utc::now())
                .execute(&self.pool)
                .await?
                .rows_affected();

        if deleted > 0 {
            tracing::info!(requests_deleted = deleted, "Cleaned up expired reset requests");
        }

        Ok(deleted)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    tenant_id: String,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(&self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Corrupt password hash: {e}")))?;

        Ok(User {
            id: self.id,
            username: Username::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash,
            role: Role::from_db(&self.role),
            tenant_id: TenantId::new(self.tenant_id),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
