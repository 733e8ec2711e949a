//! Product Query Use Cases
//!
//! Read paths: list all products in the caller's tenant and fetch one
//! by id.

use std::sync::Arc;

use kernel::tenant::TenantContext;
use uuid::Uuid;

use crate::domain::entity::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{ProductError, ProductResult};

/// List/get use case
pub struct ProductQueryUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> ProductQueryUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, ctx: &TenantContext) -> ProductResult<Vec<Product>> {
        self.repo.list(&ctx.tenant_id).await
    }

    pub async fn get(&self, ctx: &TenantContext, id: Uuid) -> ProductResult<Product> {
        self.repo
            .find_by_id(&ctx.tenant_id, id)
            .await?
            .ok_or(ProductError::NotFound)
    }
}
