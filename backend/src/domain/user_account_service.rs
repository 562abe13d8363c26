//! User account service: login, profile and provisioning.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::{JoinError, spawn_blocking};
use tracing::info;
use zeroize::Zeroizing;

use crate::domain::auth::{hash_password, verify_password};
use crate::domain::forms::UserForm;
use crate::domain::ports::{
    INVALID_CREDENTIALS_MESSAGE, LoginService, UserPersistenceError, UserRepository, UserService,
};
use crate::domain::{Error, LoginCredentials, NewUser, ProfileUpdate, User, UserId};

/// Message returned when a user id does not resolve.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Account service backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserAccountService<U> {
    users: Arc<U>,
}

impl<U> UserAccountService<U> {
    /// Create a service over `users`.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { .. } => {
            Error::conflict("Email is already registered")
        }
    }
}

fn password_worker_error(error: JoinError) -> Error {
    Error::internal(format!("password worker failed: {error}"))
}

/// Argon2 is CPU-bound; run it on the blocking pool, off the async workers.
async fn verify_off_thread(stored_hash: String, password: Zeroizing<String>) -> Result<bool, Error> {
    spawn_blocking(move || verify_password(&stored_hash, &password))
        .await
        .map_err(password_worker_error)
}

async fn hash_off_thread(password: Zeroizing<String>) -> Result<String, Error> {
    spawn_blocking(move || hash_password(&password))
        .await
        .map_err(password_worker_error)?
}

#[async_trait]
impl<U> LoginService for UserAccountService<U>
where
    U: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let record = self
            .users
            .find_credentials(credentials.email())
            .await
            .map_err(map_user_error)?;
        let Some(record) = record else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };
        let Some(stored_hash) = record.password_hash else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };
        let password = Zeroizing::new(credentials.password().to_owned());
        if verify_off_thread(stored_hash, password).await? {
            Ok(record.user)
        } else {
            Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE))
        }
    }
}

#[async_trait]
impl<U> UserService for UserAccountService<U>
where
    U: UserRepository,
{
    async fn profile(&self, user_id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        update: ProfileUpdate,
    ) -> Result<User, Error> {
        self.users
            .update_phone(user_id, update.phone)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }

    async fn create_user(&self, form: UserForm) -> Result<User, Error> {
        let password_hash = match form.password {
            Some(password) => Some(hash_off_thread(password).await?),
            None => None,
        };
        let draft = NewUser {
            name: form.name,
            email: form.email.to_lowercase(),
            role: form.role,
            password_hash,
        };
        let user = self.users.insert(&draft).await.map_err(map_user_error)?;
        info!(user_id = %user.id, role = %user.role, "user account created");
        Ok(user)
    }
}

#[cfg(test)]
#[path = "user_account_service_tests.rs"]
mod tests;
