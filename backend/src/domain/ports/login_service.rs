//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing the backing infrastructure.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

use super::fixture_data::{FIXTURE_ADMIN_EMAIL, FIXTURE_ADMIN_PASSWORD, fixture_admin};

/// Message returned for any credential mismatch.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated account.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}

/// In-memory authenticator used when no database is configured.
///
/// `admin@example.com` / `password` authenticates as the fixture
/// administrator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        if credentials.email() == FIXTURE_ADMIN_EMAIL
            && credentials.password() == FIXTURE_ADMIN_PASSWORD
        {
            Ok(fixture_admin())
        } else {
            Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE))
        }
    }
}
