//! Auth Router

use axum::{Router, middleware, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };
    let mw_state = AuthMiddlewareState { config };

    let public = Router::new()
        .route("/Login", post(handlers::login::<R>))
        .route("/OlvideMiClave", post(handlers::forgot_password::<R>))
        .route("/Register", post(handlers::register::<R>));

    let protected = Router::new()
        .route("/CambioDeClave", post(handlers::change_password::<R>))
        .route_layer(middleware::from_fn_with_state(mw_state, require_auth));

    public.merge(protected).with_state(state)
}
