use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserResponse};
use crate::repository::UserRepository;

/// Operations the users handlers depend on.
///
/// Mutations report success as a boolean; the handlers turn `false` into the
/// matching error. `Err` is reserved for failures the caller should see
/// unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    async fn get_users(&self) -> UserResult<Vec<UserResponse>>;

    async fn get_user(&self, id: &str) -> UserResult<Option<UserResponse>>;

    /// `true` when no account uses `email` yet, `false` when it is taken.
    async fn check_mail(&self, email: &str) -> UserResult<bool>;

    async fn create_user(&self, name: &str, email: &str, password: &str) -> UserResult<bool>;

    async fn update_user(&self, id: &str, name: &str, email: &str) -> UserResult<bool>;

    async fn delete_user(&self, id: &str) -> UserResult<bool>;

    /// Verifies `oldpass` and that `newpass == copass` before storing the new hash.
    async fn change_pass(
        &self,
        id: &str,
        oldpass: &str,
        newpass: &str,
        copass: &str,
    ) -> UserResult<bool>;
}

/// Default [`UsersService`] backed by a [`UserRepository`], hashing with Argon2
#[derive(Clone)]
pub struct AccountService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> AccountService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[async_trait]
impl<R: UserRepository> UsersService for AccountService<R> {
    async fn get_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_user(&self, id: &str) -> UserResult<Option<UserResponse>> {
        let user = self.repository.get_by_id(id).await?;
        Ok(user.map(UserResponse::from))
    }

    async fn check_mail(&self, email: &str) -> UserResult<bool> {
        Ok(!self.repository.email_exists(email).await?)
    }

    async fn create_user(&self, name: &str, email: &str, password: &str) -> UserResult<bool> {
        let password_hash = self.hash_password(password)?;
        let user = User::new(name.to_string(), email.to_string(), password_hash);

        match self.repository.create(user).await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!(email = %email, error = %e, "Failed to create user");
                Ok(false)
            }
        }
    }

    async fn update_user(&self, id: &str, name: &str, email: &str) -> UserResult<bool> {
        let Some(mut user) = self.repository.get_by_id(id).await? else {
            return Ok(false);
        };

        user.name = name.to_string();
        user.email = email.to_string();

        match self.repository.update(user).await {
            Ok(updated) => Ok(updated.is_some()),
            Err(e) => {
                tracing::warn!(user_id = %id, error = %e, "Failed to update user");
                Ok(false)
            }
        }
    }

    async fn delete_user(&self, id: &str) -> UserResult<bool> {
        self.repository.delete(id).await
    }

    async fn change_pass(
        &self,
        id: &str,
        oldpass: &str,
        newpass: &str,
        copass: &str,
    ) -> UserResult<bool> {
        let Some(mut user) = self.repository.get_by_id(id).await? else {
            return Ok(false);
        };

        if !self.verify_password(oldpass, &user.password_hash)? {
            tracing::info!(user_id = %id, "Change password rejected: current password mismatch");
            return Ok(false);
        }

        if newpass != copass {
            tracing::info!(user_id = %id, "Change password rejected: confirmation mismatch");
            return Ok(false);
        }

        user.password_hash = self.hash_password(newpass)?;
        Ok(self.repository.update(user).await?.is_some())
    }
}
