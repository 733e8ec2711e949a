//! Products Router

use auth::application::config::AuthConfig;
use auth::presentation::middleware::{AuthMiddlewareState, require_auth};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::infra::postgres::PgProductRepository;
use crate::presentation::handlers::{self, ProductAppState};

/// Create the Products router with PostgreSQL repository
pub fn products_router(repo: PgProductRepository, config: AuthConfig) -> Router {
    products_router_generic(repo, config)
}

/// Create a generic Products router for any repository implementation.
/// Every route requires a valid access token.
pub fn products_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let state = ProductAppState {
        repo: Arc::new(repo),
    };
    let mw_state = AuthMiddlewareState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_products::<R>))
        .route("/", post(handlers::create_product::<R>))
        .route("/{id}", get(handlers::get_product::<R>))
        .route("/{id}", put(handlers::update_product::<R>))
        .route("/{id}", delete(handlers::delete_product::<R>))
        .route_layer(middleware::from_fn_with_state(mw_state, require_auth))
        .with_state(state)
}
