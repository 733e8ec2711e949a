//! Auth Middleware
//!
//! Verifies the bearer token and installs a [`TenantContext`] in the
//! request extensions. Every tenant-scoped handler downstream reads the
//! tenant from that context, never from the request body.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::tenant::{TenantContext, TenantId};
use platform::token::decode_access_token;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid access token
pub async fn require_auth(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let Some(token) = token else {
        return Err(AuthError::MissingToken.into_response());
    };

    let claims = match decode_access_token(token, &state.config.token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected access token");
            return Err(AuthError::from(e).into_response());
        }
    };

    let Ok(subject) = Uuid::parse_str(&claims.sub) else {
        return Err(AuthError::TokenInvalid.into_response());
    };
    let ctx = TenantContext::authenticated(
        TenantId::new(claims.tenant_id),
        subject,
        claims.username,
        claims.role,
    );

    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
