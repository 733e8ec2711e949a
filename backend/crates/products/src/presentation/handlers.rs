//! HTTP Handlers
//!
//! All routes sit behind the auth middleware, so the extracted
//! [`TenantContext`] always comes from a verified token.

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use kernel::tenant::TenantContext;
use uuid::Uuid;

use crate::application::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, ProductQueryUseCase,
    UpdateProductInput, UpdateProductUseCase,
};
use crate::domain::repository::ProductRepository;
use crate::error::ProductResult;
use crate::presentation::dto::{MessageResponse, ProductRequest, ProductResponse};

/// Shared state for product handlers
#[derive(Clone)]
pub struct ProductAppState<R>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/Products
pub async fn list_products<R>(
    State(state): State<ProductAppState<R>>,
    ctx: TenantContext,
) -> ProductResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProductQueryUseCase::new(state.repo.clone());
    let products = use_case.list(&ctx).await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /api/Products/{id}
pub async fn get_product<R>(
    State(state): State<ProductAppState<R>>,
    ctx: TenantContext,
    Path(id): Path<Uuid>,
) -> ProductResult<Json<ProductResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProductQueryUseCase::new(state.repo.clone());
    let product = use_case.get(&ctx, id).await?;

    Ok(Json(product.into()))
}

/// POST /api/Products
pub async fn create_product<R>(
    State(state): State<ProductAppState<R>>,
    ctx: TenantContext,
    Json(req): Json<ProductRequest>,
) -> ProductResult<Json<ProductResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateProductUseCase::new(state.repo.clone());
    let product = use_case
        .execute(
            &ctx,
            CreateProductInput {
                name: req.name,
                description: req.description,
                price: req.price,
                stock: req.stock,
            },
        )
        .await?;

    Ok(Json(product.into()))
}

/// PUT /api/Products/{id}
pub async fn update_product<R>(
    State(state): State<ProductAppState<R>>,
    ctx: TenantContext,
    Path(id): Path<Uuid>,
    Json(req): Json<ProductRequest>,
) -> ProductResult<Json<MessageResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProductUseCase::new(state.repo.clone());
    use_case
        .execute(
            &ctx,
            id,
            UpdateProductInput {
                name: req.name,
                description: req.description,
                price: req.price,
                stock: req.stock,
            },
        )
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Producto actualizado exitosamente.".to_string(),
    }))
}

/// DELETE /api/Products/{id}
pub async fn delete_product<R>(
    State(state): State<ProductAppState<R>>,
    ctx: TenantContext,
    Path(id): Path<Uuid>,
) -> ProductResult<Json<MessageResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteProductUseCase::new(state.repo.clone());
    use_case.execute(&ctx, id).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Producto eliminado exitosamente.".to_string(),
    }))
}
