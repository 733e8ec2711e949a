//! Products Backend Module
//!
//! Tenant-scoped product catalog CRUD. Every operation runs against the
//! tenant carried by the caller's verified token; no handler or query
//! ever falls back to an ambient tenant.
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity and repository trait
//! - `application/` - Use cases (list, get, create, update, delete)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ProductError, ProductResult};
pub use infra::postgres::PgProductRepository;
pub use presentation::router::{products_router, products_router_generic};
