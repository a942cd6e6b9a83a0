use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store keyed by normalized email.
///
/// The uniqueness check and the insert happen under one write lock, so
/// concurrent registrations for the same email cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<EmailAddress, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(UserError::EmailInUse(user.email.to_string()));
        }

        users.insert(user.email.clone(), user.clone());
        tracing::debug!(user_id = %user.id, "User stored in memory");

        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}
