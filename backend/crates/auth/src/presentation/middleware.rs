//! Auth Gate Middleware
//!
//! Middleware for requiring bearer-token authentication on protected
//! routes. On success the resolved user is attached to the request
//! extensions as [`CurrentUser`]; no token refresh or other side effect.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, phone::Phone};
use crate::error::AuthError;

/// Auth gate state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// The authenticated user, attached to request extensions by the gate
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: Email,
    pub name: String,
    pub phone: Phone,
}

/// Middleware that requires a valid bearer token
///
/// Rejects with 401 when the `Authorization` header is absent, the token
/// fails verification, or the token's user no longer exists.
pub async fn require_bearer_auth<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = platform::bearer::extract_bearer_token(req.headers())
        .map(str::to_owned)
        .ok_or_else(|| AuthError::Unauthenticated.into_response())?;

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(&token)
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
        email: user.email,
        name: user.name,
        phone: user.phone,
    });

    Ok(next.run(req).await)
}
