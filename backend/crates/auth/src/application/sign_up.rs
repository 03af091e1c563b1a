//! Sign Up Use Case
//!
//! Creates a new user account and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    phone::Phone,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub token: String,
    pub user: User,
}

/// Sign up use case
pub struct SignUpUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> SignUpUseCase<U, C>
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

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate fields
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }

        let email = Email::new(input.email)?;
        let phone = Phone::new(input.phone)?;

        // Check if email is taken. The unique index on users.email backs
        // this check under concurrent signups (see PgAuthRepository::create).
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        // Create user and credentials
        let user = User::new(email, name, phone);
        let credential = Credential::new(user.user_id, password_hash);

        // Persist
        self.user_repo.create(&user).await?;
        self.credential_repo.create(&credential).await?;

        // Issue bearer token
        let token = platform::token::issue(
            &self.config.token_secret,
            user.user_id.into_uuid(),
            self.config.token_ttl,
        );

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User signed up"
        );

        Ok(SignUpOutput { token, user })
    }
}
