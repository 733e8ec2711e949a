//! Product use-case tests backed by an in-memory repository, centered
//! on tenant isolation.

use std::sync::{Arc, Mutex};

use kernel::tenant::{TenantContext, TenantId};
use products::application::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, ProductQueryUseCase,
    UpdateProductInput, UpdateProductUseCase,
};
use products::domain::entity::Product;
use products::domain::repository::ProductRepository;
use products::error::{ProductError, ProductResult};
use rust_decimal_macros::dec;
use uuid::Uuid;

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryProductRepository {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, tenant: &TenantId) -> ProductResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.tenant_id == *tenant)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, tenant: &TenantId, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.tenant_id == *tenant && p.id == id)
            .cloned())
    }

    async fn create(&self, tenant: &TenantId, product: &Product) -> ProductResult<Product> {
        let mut stored = product.clone();
        stored.tenant_id = tenant.clone();
        self.products.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, tenant: &TenantId, product: &Product) -> ProductResult<bool> {
        let mut products = self.products.lock().unwrap();
        match products
            .iter_mut()
            .find(|p| p.tenant_id == *tenant && p.id == product.id)
        {
            Some(existing) => {
                *existing = product.clone();
                existing.tenant_id = tenant.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, tenant: &TenantId, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| !(p.tenant_id == *tenant && p.id == id));
        Ok(products.len() < before)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn ctx(tenant: &str) -> TenantContext {
    TenantContext::authenticated(TenantId::new(tenant), Uuid::new_v4(), "tester", "User")
}

async fn seed_product(repo: &Arc<InMemoryProductRepository>, tenant: &str, name: &str) -> Product {
    CreateProductUseCase::new(repo.clone())
        .execute(
            &ctx(tenant),
            CreateProductInput {
                name: name.to_string(),
                description: None,
                price: dec!(9.99),
                stock: 10,
            },
        )
        .await
        .unwrap()
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_assigns_tenant_from_context() {
    let repo = Arc::new(InMemoryProductRepository::default());

    let product = seed_product(&repo, "tenant-a", "Widget").await;

    assert_eq!(product.tenant_id.as_str(), "tenant-a");
    assert_eq!(product.name, "Widget");
    assert!(product.updated_at.is_none());
}

#[tokio::test]
async fn test_create_rejects_invalid_fields() {
    let repo = Arc::new(InMemoryProductRepository::default());
    let use_case = CreateProductUseCase::new(repo);

    for (name, price, stock) in [
        ("", dec!(1.00), 0),
        ("Widget", dec!(0), 0),
        ("Widget", dec!(-5), 0),
        ("Widget", dec!(1.00), -1),
    ] {
        let err = use_case
            .execute(
                &ctx("tenant-a"),
                CreateProductInput {
                    name: name.to_string(),
                    description: None,
                    price,
                    stock,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }
}

// ============================================================================
// Read
// ============================================================================

#[tokio::test]
async fn test_list_returns_only_own_tenant_products() {
    let repo = Arc::new(InMemoryProductRepository::default());
    seed_product(&repo, "tenant-a", "A1").await;
    seed_product(&repo, "tenant-a", "A2").await;
    seed_product(&repo, "tenant-b", "B1").await;

    let query = ProductQueryUseCase::new(repo.clone());
    let listed = query.list(&ctx("tenant-a")).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|p| p.tenant_id.as_str() == "tenant-a"));
}

#[tokio::test]
async fn test_get_cross_tenant_id_is_not_found() {
    // A real id belonging to another tenant must be indistinguishable
    // from a nonexistent one.
    let repo = Arc::new(InMemoryProductRepository::default());
    let foreign = seed_product(&repo, "tenant-b", "B1").await;

    let query = ProductQueryUseCase::new(repo.clone());
    let err = query.get(&ctx("tenant-a"), foreign.id).await.unwrap_err();
    assert!(matches!(err, ProductError::NotFound));

    let missing = query.get(&ctx("tenant-a"), Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(missing, ProductError::NotFound));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_own_product_succeeds() {
    let repo = Arc::new(InMemoryProductRepository::default());
    let product = seed_product(&repo, "tenant-a", "Widget").await;

    let updated = UpdateProductUseCase::new(repo.clone())
        .execute(
            &ctx("tenant-a"),
            product.id,
            UpdateProductInput {
                name: "Gadget".to_string(),
                description: Some("v2".to_string()),
                price: dec!(19.99),
                stock: 5,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Gadget");
    assert_eq!(updated.price, dec!(19.99));
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_update_cross_tenant_id_is_not_found() {
    let repo = Arc::new(InMemoryProductRepository::default());
    let foreign = seed_product(&repo, "tenant-b", "B1").await;

    let err = UpdateProductUseCase::new(repo.clone())
        .execute(
            &ctx("tenant-a"),
            foreign.id,
            UpdateProductInput {
                name: "Hijacked".to_string(),
                description: None,
                price: dec!(1.00),
                stock: 0,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ProductError::NotFound));

    // The foreign row is untouched.
    let kept = repo
        .find_by_id(&TenantId::new("tenant-b"), foreign.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.name, "B1");
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_own_product_succeeds() {
    let repo = Arc::new(InMemoryProductRepository::default());
    let product = seed_product(&repo, "tenant-a", "Widget").await;

    DeleteProductUseCase::new(repo.clone())
        .execute(&ctx("tenant-a"), product.id)
        .await
        .unwrap();

    let remaining = repo.list(&TenantId::new("tenant-a")).await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_delete_cross_tenant_id_is_not_found() {
    let repo = Arc::new(InMemoryProductRepository::default());
    let foreign = seed_product(&repo, "tenant-b", "B1").await;

    let err = DeleteProductUseCase::new(repo.clone())
        .execute(&ctx("tenant-a"), foreign.id)
        .await
        .unwrap_err();

    assert!(matches!(err, ProductError::NotFound));
    assert_eq!(repo.list(&TenantId::new("tenant-b")).await.unwrap().len(), 1);
}
