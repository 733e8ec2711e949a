//! Tenant identity and per-request tenant context.
//!
//! Every tenant-scoped repository call takes a [`TenantId`] explicitly;
//! there is no ambient/global tenant filter. The HTTP layer materializes a
//! [`TenantContext`] from the verified `tenantId` token claim and hands it
//! down as an argument.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel tenant used when no claim is present (anonymous requests).
pub const DEFAULT_TENANT: &str = "default";

/// Tenant identifier.
///
/// An opaque customer-namespace key, at most 100 characters in storage.
/// Empty or whitespace-only input collapses to the `"default"` sentinel,
/// so resolution never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default_tenant();
        }
        Self(trimmed.to_string())
    }

    /// The `"default"` sentinel tenant.
    pub fn default_tenant() -> Self {
        Self(DEFAULT_TENANT.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_TENANT
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::default_tenant()
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Authenticated (or anonymous) request context.
///
/// Built by the JWT middleware from verified claims and stored in request
/// extensions. Handlers extract it and pass it through services and
/// repositories explicitly.
#[derive(Debug, Clone)]
pub struct TenantContext {
    /// Resolved tenant (claim `tenantId`, or the sentinel).
    pub tenant_id: TenantId,
    /// Authenticated user id (`sub` claim), if any.
    pub subject: Option<Uuid>,
    /// Authenticated username, if any.
    pub username: Option<String>,
    /// Role claim, if any.
    pub role: Option<String>,
}

impl TenantContext {
    /// Context for an unauthenticated request: default tenant, no identity.
    pub fn anonymous() -> Self {
        Self {
            tenant_id: TenantId::default_tenant(),
            subject: None,
            username: None,
            role: None,
        }
    }

    /// Context derived from verified token claims.
    pub fn authenticated(
        tenant_id: TenantId,
        subject: Uuid,
        username: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id,
            subject: Some(subject),
            username: Some(username.into()),
            role: Some(role.into()),
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.subject.is_some()
    }
}

// ============================================================================
// Axum integration (feature-gated)
// ============================================================================

/// Infallible extractor: a request without a verified token resolves to the
/// anonymous context. Rejecting unauthenticated requests is the job of the
/// auth middleware, not of tenant resolution.
#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<TenantContext>()
            .cloned()
            .unwrap_or_else(TenantContext::anonymous))
    }
}
