//! Data Transfer Objects
//!
//! Request/response bodies use camelCase field names for compatibility
//! with existing API clients.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::Product;

/// Create/update request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
}

/// Product response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            tenant_id: product.tenant_id.as_str().to_string(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Generic success/message envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use kernel::tenant::TenantId;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_request_accepts_camel_case_and_defaults() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"name":"Widget","price":"9.99"}"#).unwrap();
        assert_eq!(req.name, "Widget");
        assert_eq!(req.price, dec!(9.99));
        assert_eq!(req.stock, 0);
        assert!(req.description.is_none());
    }

    #[test]
    fn test_response_uses_camel_case_keys() {
        let product = Product::new("Widget", "", dec!(9.99), 3, TenantId::new("tenant-a"));
        let json = serde_json::to_value(ProductResponse::from(product)).unwrap();
        assert_eq!(json["tenantId"], "tenant-a");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_none());
    }
}
