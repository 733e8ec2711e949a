//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, JWT middleware
//!
//! ## Features
//! - Tenant-scoped login with username + password + tenantId
//! - HS256 JWT issuance carrying the `tenantId` claim
//! - Password change, anti-enumeration forgot-password, registration
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, verified in constant time
//! - Tenant isolation enforced through explicit repository parameters
//! - Login and email lookup are the only cross-tenant bypass reads

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel types for unified error handling and tenant context
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::tenant::{TenantContext, TenantId};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
