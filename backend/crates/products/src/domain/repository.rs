//! Repository Interface
//!
//! Every method takes the tenant explicitly; the SQL predicate on
//! `tenant_id` is what turns a cross-tenant id into a plain not-found.

use kernel::tenant::TenantId;
use uuid::Uuid;

use crate::domain::entity::Product;
use crate::error::ProductResult;

/// Persistence boundary for [`Product`].
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// All products owned by one tenant.
    async fn list(&self, tenant: &TenantId) -> ProductResult<Vec<Product>>;

    /// Single product by id, scoped to one tenant.
    async fn find_by_id(&self, tenant: &TenantId, id: Uuid) -> ProductResult<Option<Product>>;

    /// Insert a product under `tenant`. The entity's own `tenant_id` is
    /// ignored; the stored row always carries the explicit parameter.
    async fn create(&self, tenant: &TenantId, product: &Product) -> ProductResult<Product>;

    /// Update a product in place. Returns `false` when no row matched
    /// the (tenant, id) pair.
    async fn update(&self, tenant: &TenantId, product: &Product) -> ProductResult<bool>;

    /// Delete by id. Returns `false` when no row matched the
    /// (tenant, id) pair.
    async fn delete(&self, tenant: &TenantId, id: Uuid) -> ProductResult<bool>;
}
