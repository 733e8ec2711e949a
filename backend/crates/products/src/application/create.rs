//! Create Product Use Case

use std::sync::Arc;

use kernel::tenant::TenantContext;
use rust_decimal::Decimal;

use crate::application::validate_fields;
use crate::domain::entity::Product;
use crate::domain::repository::ProductRepository;
use crate::error::ProductResult;

/// Create product input
pub struct CreateProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

/// Create product use case
pub struct CreateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        ctx: &TenantContext,
        input: CreateProductInput,
    ) -> ProductResult<Product> {
        validate_fields(&input.name, input.price, input.stock)?;

        let product = Product::new(
            input.name.trim(),
            input.description.unwrap_or_default(),
            input.price,
            input.stock,
            ctx.tenant_id.clone(),
        );

        // Ownership comes from the verified token. Even if the entity
        // arrived with a forged tenant, the repository binds this one.
        let stored = self.repo.create(&ctx.tenant_id, &product).await?;

        tracing::info!(
            product_id = %stored.id,
            tenant_id = %stored.tenant_id,
            "Product created"
        );

        Ok(stored)
    }
}
