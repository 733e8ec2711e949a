//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::application::config::AuthConfig;
use auth::domain::entity::User;
use auth::domain::repository::{PasswordResetRepository, UserRepository};
use auth::domain::value_object::{Email, Role, Username};
use auth::{PgAuthRepository, auth_router};
use kernel::tenant::TenantId;
use platform::password::ClearTextPassword;
use axum::Router;
use products::{PgProductRepository, products_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,products=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired password-reset requests
    // Errors here should not prevent server startup
    let auth_repo_for_cleanup = PgAuthRepository::new(pool.clone());
    match auth_repo_for_cleanup.delete_expired().await {
        Ok(deleted) => {
            tracing::info!(
                requests_deleted = deleted,
                "Password reset cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Password reset cleanup failed, continuing anyway"
            );
        }
    }

    // Seed demo tenants so a fresh database is immediately usable
    if let Err(e) = seed_default_users(&auth_repo_for_cleanup).await {
        tracing::warn!(error = %e, "Demo user seeding failed, continuing anyway");
    }

    // Token configuration
    let auth_config = match env::var("JWT_SECRET") {
        Ok(secret) if !secret.trim().is_empty() => AuthConfig::with_secret(secret),
        _ => {
            tracing::warn!("JWT_SECRET not set, falling back to the development signing key");
            AuthConfig::development()
        }
    };

    // Build router
    let app = Router::new()
        .nest(
            "/api/Auth",
            auth_router(PgAuthRepository::new(pool.clone()), auth_config.clone()),
        )
        .nest(
            "/api/Products",
            products_router(PgProductRepository::new(pool.clone()), auth_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Idempotent demo data: one admin account per demo tenant.
async fn seed_default_users(repo: &PgAuthRepository) -> anyhow::Result<()> {
    for tenant in ["tenant-a", "tenant-b"] {
        let tenant_id = TenantId::new(tenant);
        if repo.exists_by_username(&tenant_id, "admin").await? {
            continue;
        }

        let password_hash = ClearTextPassword::new("Admin123!".to_string())?.hash(None)?;
        let user = User::new(
            Username::new("admin")?,
            Email::new(format!("admin@{tenant}.com"))?,
            password_hash,
            Role::Admin,
            tenant_id.clone(),
        );
        UserRepository::create(repo, &tenant_id, &user).await?;
        tracing::info!(tenant_id = %tenant_id, "Seeded demo admin user");
    }

    Ok(())
}
