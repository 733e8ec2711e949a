//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use kernel::tenant::TenantContext;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, ForgotPasswordInput, ForgotPasswordUseCase,
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    ApiResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
    RegisterRequest,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/Auth/Login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
            tenant_id: req.tenant_id,
        })
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        token: output.token,
        message: "Login exitoso.".to_string(),
    }))
}

// ============================================================================
// Change Password
// ============================================================================

/// POST /api/Auth/CambioDeClave (protected)
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    ctx: TenantContext,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<Json<ApiResponse>>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(
            &ctx,
            ChangePasswordInput {
                username: req.username,
                current_password: req.current_password,
                new_password: req.new_password,
            },
        )
        .await?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Contraseña actualizada exitosamente.".to_string(),
    }))
}

// ============================================================================
// Forgot Password
// ============================================================================

/// POST /api/Auth/OlvideMiClave
pub async fn forgot_password<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<ForgotPasswordRequest>,
) -> AuthResult<Json<ApiResponse>>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = ForgotPasswordUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let message = use_case
        .execute(ForgotPasswordInput {
            username_or_email: req.username_or_email,
        })
        .await?;

    Ok(Json(ApiResponse {
        success: true,
        message: message.to_string(),
    }))
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/Auth/Register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Json<ApiResponse>>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
            role: req.role,
            tenant_id: req.tenant_id,
        })
        .await?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Usuario registrado exitosamente.".to_string(),
    }))
}
