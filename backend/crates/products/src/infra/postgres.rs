//! PostgreSQL Repository Implementation
//!
//! Every statement carries a `tenant_id` predicate or bind taken from
//! the explicit parameter, so a cross-tenant id matches zero rows.

use chrono::{DateTime, Utc};
use kernel::tenant::TenantId;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Product;
use crate::domain::repository::ProductRepository;
use crate::error::ProductResult;

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgProductRepository {
    async fn list(&self, tenant: &TenantId) -> ProductResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                id,
                tenant_id,
                name,
                description,
                price,
                stock,
                created_at,
                updated_at
            FROM products
            WHERE tenant_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(tenant.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_by_id(&self, tenant: &TenantId, id: Uuid) -> ProductResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                id,
                tenant_id,
                name,
                description,
                price,
                stock,
                created_at,
                updated_at
            FROM products
            WHERE tenant_id = $1 AND id = $2
            "#,
        )
        .bind(tenant.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn create(&self, tenant: &TenantId, product: &Product) -> ProductResult<Product> {
        // The explicit tenant wins over whatever the entity carries.
        sqlx::query(
            r#"
            INSERT INTO products (
                id,
                tenant_id,
                name,
                description,
                price,
                stock,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(product.id)
        .bind(tenant.as_str())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        let mut stored = product.clone();
        stored.tenant_id = tenant.clone();
        Ok(stored)
    }

    async fn update(&self, tenant: &TenantId, product: &Product) -> ProductResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $3,
                description = $4,
                price = $5,
                stock = $6,
                updated_at = $7
            WHERE tenant_id = $1 AND id = $2
            "#,
        )
        .bind(tenant.as_str())
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, tenant: &TenantId, id: Uuid) -> ProductResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE tenant_id = $1 AND id = $2")
            .bind(tenant.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    tenant_id: String,
    name: String,
    description: String,
    price: Decimal,
    stock: i32,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            tenant_id: TenantId::new(self.tenant_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
