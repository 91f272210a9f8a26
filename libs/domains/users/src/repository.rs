use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user, rejecting an email that is already used
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// List all users, oldest first
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Replace a stored user. `Ok(None)` when the id is unknown.
    async fn update(&self, user: User) -> UserResult<Option<User>>;

    /// Delete a user by ID. `Ok(false)` when the id is unknown.
    async fn delete(&self, id: &str) -> UserResult<bool>;

    /// Check if an email already exists (case-insensitive)
    async fn email_exists(&self, email: &str) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.has_email(&user.email)) {
            return Err(UserError::EmailAlreadyTaken(format!(
                "Email '{}' is already registered",
                user.email
            )));
        }

        users.insert(user.id.clone(), user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        // UUIDv7 ids break created_at ties in insertion order
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        Ok(result)
    }

    async fn update(&self, mut user: User) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Ok(None);
        }

        if users
            .values()
            .any(|u| u.id != user.id && u.has_email(&user.email))
        {
            return Err(UserError::EmailAlreadyTaken(format!(
                "Email '{}' is already registered",
                user.email
            )));
        }

        user.updated_at = Utc::now();
        users.insert(user.id.clone(), user.clone());

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(Some(user))
    }

    async fn delete(&self, id: &str) -> UserResult<bool> {
        let mut users = self.users.write().await;

        if users.remove(id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.has_email(email)))
    }
}
