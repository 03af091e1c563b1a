//! Log In Use Case
//!
//! Authenticates a user by email + password and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub email: String,
    pub password: String,
}

/// Log in output
pub struct LogInOutput {
    pub token: String,
    pub user: User,
}

/// Log in use case
pub struct LogInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> LogInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    pub fn new(user_repo: Arc<U>, credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            credential_repo,
            config,
        }
    }

    /// Every failure path returns `InvalidCredentials` so responses don't
    /// reveal whether the email is registered.
    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let credential = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Credential not found".to_string()))?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !credential
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let token = platform::token::issue(
            &self.config.token_secret,
            user.user_id.into_uuid(),
            self.config.token_ttl,
        );

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LogInOutput { token, user })
    }
}
