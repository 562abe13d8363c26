//! Driving port for user profiles and account provisioning.

use async_trait::async_trait;

use crate::domain::forms::UserForm;
use crate::domain::{Error, ProfileUpdate, User, UserId};

use super::fixture_data::fixture_admin;

/// Domain use-case port for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Profile of `user_id`.
    async fn profile(&self, user_id: &UserId) -> Result<User, Error>;

    /// Apply self-service changes to `user_id`.
    async fn update_profile(&self, user_id: &UserId, update: ProfileUpdate)
    -> Result<User, Error>;

    /// Provision an account from a validated form.
    async fn create_user(&self, form: UserForm) -> Result<User, Error>;
}

/// Fixture user service used when no database is configured.
///
/// Every identifier resolves to the fixture administrator, carrying the
/// requested id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserService;

#[async_trait]
impl UserService for FixtureUserService {
    async fn profile(&self, user_id: &UserId) -> Result<User, Error> {
        Ok(User {
            id: *user_id,
            ..fixture_admin()
        })
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        update: ProfileUpdate,
    ) -> Result<User, Error> {
        Ok(User {
            id: *user_id,
            phone: update.phone,
            ..fixture_admin()
        })
    }

    async fn create_user(&self, form: UserForm) -> Result<User, Error> {
        if form.email.eq_ignore_ascii_case(&fixture_admin().email) {
            return Err(Error::conflict("Email is already registered"));
        }
        Ok(User {
            id: UserId::random(),
            name: form.name,
            email: form.email.to_lowercase(),
            role: form.role,
            phone: None,
            is_first_login: true,
        })
    }
}
