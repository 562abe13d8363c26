//! Shared classification of pool and Diesel failures.
//!
//! Repositories turn a [`DieselFailure`] into their own port error so that
//! constraint names never leak past this layer.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Unique constraint on `users.email`.
pub(crate) const USERS_EMAIL_KEY: &str = "users_email_key";
/// Unique constraint on `house_types.type_name`.
pub(crate) const HOUSE_TYPES_NAME_KEY: &str = "house_types_type_name_key";
/// Unique constraint on `houses (block, house_number)`.
pub(crate) const HOUSES_BLOCK_NUMBER_KEY: &str = "houses_block_house_number_key";
/// Foreign key `houses.house_type_id`.
pub(crate) const HOUSES_HOUSE_TYPE_FKEY: &str = "houses_house_type_id_fkey";
/// Foreign key `houses.user_id`.
pub(crate) const HOUSES_USER_FKEY: &str = "houses_user_id_fkey";

/// Coarse shape of a Diesel failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The connection dropped mid-operation.
    Connection(&'static str),
    /// A unique constraint rejected the write.
    UniqueViolation { constraint: Option<String> },
    /// A foreign key rejected the write.
    ForeignKeyViolation { constraint: Option<String> },
    /// Any other failure.
    Query(&'static str),
}

impl DieselFailure {
    /// Whether this is a unique violation on `constraint`.
    pub(crate) fn violates_unique(&self, constraint: &str) -> bool {
        matches!(self, Self::UniqueViolation { constraint: Some(name) } if name == constraint)
    }

    /// Whether this is a foreign key violation on `constraint`.
    pub(crate) fn violates_foreign_key(&self, constraint: &str) -> bool {
        matches!(self, Self::ForeignKeyViolation { constraint: Some(name) } if name == constraint)
    }

    /// Fallback message for failures a repository does not special-case.
    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::Connection(message) | Self::Query(message) => message,
            Self::UniqueViolation { .. } => "unique constraint violated",
            Self::ForeignKeyViolation { .. } => "foreign key constraint violated",
        }
    }
}

/// Extract a readable message from a pool error.
pub(crate) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Classify a Diesel error, logging its details at debug level.
pub(crate) fn classify_diesel_error(error: DieselError) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DieselFailure::UniqueViolation {
                constraint: info.constraint_name().map(str::to_owned),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            DieselFailure::ForeignKeyViolation {
                constraint: info.constraint_name().map(str::to_owned),
            }
        }
        _ => DieselFailure::Query("database error"),
    }
}
