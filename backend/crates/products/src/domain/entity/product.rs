//! Product Entity

use chrono::{DateTime, Utc};
use kernel::tenant::TenantId;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Catalog item owned by exactly one tenant.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Unit price; decimal to avoid float rounding on money.
    pub price: Decimal,
    pub stock: i32,
    pub tenant_id: TenantId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
        tenant_id: TenantId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            price,
            stock,
            tenant_id,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Apply caller-supplied fields and stamp the modification time.
    pub fn apply_update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
    ) {
        self.name = name.into();
        self.description = description.into();
        self.price = price;
        self.stock = stock;
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_new_product_has_no_updated_at() {
        let product = Product::new("Widget", "", dec!(9.99), 3, TenantId::new("tenant-a"));
        assert!(product.updated_at.is_none());
        assert_eq!(product.price, dec!(9.99));
    }

    #[test]
    fn test_apply_update_stamps_updated_at() {
        let mut product = Product::new("Widget", "", dec!(9.99), 3, TenantId::new("tenant-a"));
        product.apply_update("Gadget", "v2", dec!(19.99), 5);
        assert_eq!(product.name, "Gadget");
        assert!(product.updated_at.is_some());
    }
}
