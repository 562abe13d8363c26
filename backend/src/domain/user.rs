//! User identity, roles and the per-request session snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`UserId`] and [`Role`] parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The role was not one of the known roles.
    #[error("unknown role '{value}'")]
    UnknownRole {
        /// Raw value supplied by the caller.
        value: String,
    },
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from string input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap a UUID read from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Access role carried by every account.
///
/// `Staff` exists for accounts provisioned outside the user form; the form
/// itself only assigns `Admin` or `User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Estate administrator.
    Admin,
    /// Estate staff (collections, front desk).
    Staff,
    /// Resident.
    User,
}

impl Role {
    /// Wire representation used in JSON and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Staff => "STAFF",
            Self::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "STAFF" => Ok(Self::Staff),
            "USER" => Ok(Self::User),
            other => Err(UserValidationError::UnknownRole {
                value: other.to_owned(),
            }),
        }
    }
}

/// Stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Access role.
    pub role: Role,
    /// Contact phone number, if provided.
    pub phone: Option<String>,
    /// Whether the user has yet to complete their first login.
    pub is_first_login: bool,
}

/// Account to be inserted, with its password already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Full name.
    pub name: String,
    /// Login email, lower-cased.
    pub email: String,
    /// Access role.
    pub role: Role,
    /// PHC-formatted password hash; `None` leaves the account without a
    /// password until one is set.
    pub password_hash: Option<String>,
}

/// Stored account together with its password hash, for authentication only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    /// Account the hash belongs to.
    pub user: User,
    /// PHC-formatted password hash, if a password has been set.
    pub password_hash: Option<String>,
}

/// Self-service profile changes.
///
/// `phone` replaces the stored value; `None` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileUpdate {
    /// New phone number.
    pub phone: Option<String>,
}

impl ProfileUpdate {
    /// Build an update, treating an empty phone as no phone.
    ///
    /// # Examples
    /// ```
    /// use housing::domain::ProfileUpdate;
    ///
    /// assert_eq!(ProfileUpdate::from_phone(Some("")).phone, None);
    /// assert_eq!(
    ///     ProfileUpdate::from_phone(Some("0812")).phone.as_deref(),
    ///     Some("0812")
    /// );
    /// ```
    #[must_use]
    pub fn from_phone(phone: Option<&str>) -> Self {
        Self {
            phone: phone.filter(|value| !value.is_empty()).map(str::to_owned),
        }
    }
}

/// Immutable session snapshot resolved once per request.
///
/// Stored in the session cookie at login and read back by handlers; it is
/// never mutated during a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Stable identifier.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Access role.
    pub role: Role,
    /// Whether the user has yet to complete their first login.
    pub is_first_login: bool,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            is_first_login: user.is_first_login,
        }
    }
}
