use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenSubject;
use chrono::Utc;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Identity;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Well-formed credential blob that no password is expected to match.
const DUMMY_CREDENTIAL: &str =
    "AAAAAAAAAAAAAAAAAAAAAA==.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token handling
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

/// Run CPU-bound credential work off the async workers.
async fn run_blocking<F, T>(work: F) -> Result<T, UserError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| UserError::Unknown(format!("Credential task failed: {}", e)))
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            tracing::debug!("Registration rejected: email already in use");
            return Err(UserError::EmailInUse(command.email.to_string()));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            run_blocking(move || authenticator.hash_password(&password)).await??;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.insert(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, UserError> {
        let user = match EmailAddress::new(command.email) {
            Ok(email) => self.repository.find_by_email(&email).await?,
            Err(_) => None,
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;

        let Some(user) = user else {
            // Unknown emails pay the same KDF cost as a wrong password.
            run_blocking(move || authenticator.verify_password(&password, DUMMY_CREDENTIAL))
                .await?;
            tracing::debug!("Login rejected: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        let user_id = user.id;
        let result = run_blocking(move || {
            let id = user.id.to_string();
            let subject = TokenSubject {
                id: &id,
                email: user.email.as_str(),
                username: user.username.as_str(),
            };
            authenticator.authenticate(&password, &user.password_hash, subject)
        })
        .await?;

        match result {
            Ok(authenticated) => {
                tracing::info!(user_id = %user_id, "User logged in");
                Ok(AccessToken {
                    token: authenticated.access_token.token,
                    expires_at: authenticated.access_token.expires_at,
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(user_id = %user_id, "Login rejected: wrong password");
                Err(UserError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => {
                tracing::error!(user_id = %user_id, error = %e, "Token generation failed");
                Err(UserError::Unknown(format!("Token generation failed: {}", e)))
            }
        }
    }

    async fn resolve_identity(&self, token: &str) -> Result<Identity, UserError> {
        let claims = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(error = %e, "JWT validation failed");
            UserError::Unauthorized
        })?;

        Identity::try_from(claims).map_err(|e| {
            tracing::warn!(error = %e, "Token carries malformed identity claims");
            UserError::Unauthorized
        })
    }
}
