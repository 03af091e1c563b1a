//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LogInInput, LogInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{AuthResponse, LogInRequest, SignUpRequest, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        email: req.email,
        password: req.password,
        name: req.name,
        phone: req.phone,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: output.token,
            user: UserResponse::from(&output.user),
        }),
    ))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/auth/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LogInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthResponse {
        token: output.token,
        user: UserResponse::from(&output.user),
    }))
}
