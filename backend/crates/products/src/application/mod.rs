pub mod create;
pub mod delete;
pub mod query;
pub mod update;

pub use create::{CreateProductInput, CreateProductUseCase};
pub use delete::DeleteProductUseCase;
pub use query::ProductQueryUseCase;
pub use update::{UpdateProductInput, UpdateProductUseCase};

use rust_decimal::Decimal;

use crate::error::{ProductError, ProductResult};

/// Maximum stored product name length.
pub const MAX_NAME_LENGTH: usize = 200;

/// Shared field validation for create and update.
pub(crate) fn validate_fields(name: &str, price: Decimal, stock: i32) -> ProductResult<()> {
    if name.trim().is_empty() {
        return Err(ProductError::Validation(
            "El nombre del producto es requerido.".to_string(),
        ));
    }
    if name.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(ProductError::Validation(
            "El nombre del producto no puede exceder 200 caracteres.".to_string(),
        ));
    }
    if price <= Decimal::ZERO {
        return Err(ProductError::Validation(
            "El precio debe ser mayor a 0.".to_string(),
        ));
    }
    if stock < 0 {
        return Err(ProductError::Validation(
            "El stock no puede ser negativo.".to_string(),
        ));
    }
    Ok(())
}
