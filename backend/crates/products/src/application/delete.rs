//! Delete Product Use Case

use std::sync::Arc;

use kernel::tenant::TenantContext;
use uuid::Uuid;

use crate::domain::repository::ProductRepository;
use crate::error::{ProductError, ProductResult};

/// Delete product use case
pub struct DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, ctx: &TenantContext, id: Uuid) -> ProductResult<()> {
        let deleted = self.repo.delete(&ctx.tenant_id, id).await?;
        if !deleted {
            return Err(ProductError::NotFound);
        }

        tracing::info!(
            product_id = %id,
            tenant_id = %ctx.tenant_id,
            "Product deleted"
        );

        Ok(())
    }
}
