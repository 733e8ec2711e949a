//! Update Product Use Case

use std::sync::Arc;

use kernel::tenant::TenantContext;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::application::validate_fields;
use crate::domain::entity::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{ProductError, ProductResult};

/// Update product input
pub struct UpdateProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

/// Update product use case
pub struct UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        ctx: &TenantContext,
        id: Uuid,
        input: UpdateProductInput,
    ) -> ProductResult<Product> {
        validate_fields(&input.name, input.price, input.stock)?;

        let mut product = self
            .repo
            .find_by_id(&ctx.tenant_id, id)
            .await?
            .ok_or(ProductError::NotFound)?;

        product.apply_update(
            input.name.trim(),
            input.description.unwrap_or_default(),
            input.price,
            input.stock,
        );

        // The tenant predicate travels with the UPDATE; a row that
        // slipped to another tenant in the meantime reports not-found.
        let updated = self.repo.update(&ctx.tenant_id, &product).await?;
        if !updated {
            return Err(ProductError::NotFound);
        }

        tracing::info!(
            product_id = %product.id,
            tenant_id = %ctx.tenant_id,
            "Product updated"
        );

        Ok(product)
    }
}
