//! Authenticate Use Case
//!
//! Resolves a bearer token to the user it was issued for.
//! Used by the auth-gate middleware on every protected request.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Verify the token signature and expiry, then load the user.
    ///
    /// Fails with `Unauthenticated` when the token is invalid, expired,
    /// or the user it references no longer exists.
    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let user_uuid = platform::token::verify(&self.config.token_secret, token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            AuthError::Unauthenticated
        })?;

        self.user_repo
            .find_by_id(&UserId::from_uuid(user_uuid))
            .await?
            .ok_or(AuthError::Unauthenticated)
    }
}
