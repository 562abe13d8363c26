//! Houses, house types and the drafts used to create them.
//!
//! A house is *available* when no user owns it and *occupied* otherwise.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::forms::{FormViolations, HouseForm};
use super::UserId;

/// Validation errors returned by identifier parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HouseValidationError {
    /// The identifier was empty.
    #[error("identifier must not be empty")]
    EmptyId,
    /// The identifier was not a UUID.
    #[error("identifier must be a valid UUID")]
    InvalidId,
}

fn parse_uuid(raw: &str) -> Result<Uuid, HouseValidationError> {
    if raw.is_empty() {
        return Err(HouseValidationError::EmptyId);
    }
    Uuid::parse_str(raw).map_err(|_| HouseValidationError::InvalidId)
}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(Uuid);

        impl $name {
            /// Validate and construct an identifier from string input.
            pub fn new(id: impl AsRef<str>) -> Result<Self, HouseValidationError> {
                parse_uuid(id.as_ref()).map(Self)
            }

            /// Wrap a UUID read from storage.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Generate a new random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = HouseValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

uuid_id! {
    /// Stable house identifier.
    HouseId
}

uuid_id! {
    /// Stable house-type identifier.
    HouseTypeId
}

/// Priced category of house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseType {
    /// Stable identifier.
    pub id: HouseTypeId,
    /// Display name.
    pub type_name: String,
    /// Monthly fee.
    pub price: f64,
    /// Free-form description.
    pub description: Option<String>,
}

/// House type as embedded in a [`House`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseTypeSummary {
    /// Stable identifier.
    pub id: HouseTypeId,
    /// Display name.
    pub type_name: String,
    /// Monthly fee.
    pub price: f64,
}

/// Owner as embedded in a [`House`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseOwner {
    /// Owning user.
    pub id: UserId,
    /// Owner's full name.
    pub name: String,
}

/// A house in the estate.
///
/// ## Invariants
/// - `house_number` and `block` are 1..=50 characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    /// Stable identifier.
    pub id: HouseId,
    /// House number within the block.
    pub house_number: String,
    /// Block label.
    pub block: String,
    /// Category and price.
    pub house_type: HouseTypeSummary,
    /// Current owner, if any.
    pub owner: Option<HouseOwner>,
}

impl House {
    /// Whether no user owns this house.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.owner.is_none()
    }
}

/// Validated request to create a house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHouse {
    /// House number within the block.
    pub house_number: String,
    /// Block label.
    pub block: String,
    /// Category of the house.
    pub house_type_id: HouseTypeId,
    /// Owning user, if assigned at creation.
    pub owner_id: Option<UserId>,
}

impl TryFrom<HouseForm> for NewHouse {
    type Error = FormViolations;

    /// Resolve the form's string references into typed identifiers.
    fn try_from(form: HouseForm) -> Result<Self, Self::Error> {
        let mut violations = FormViolations::default();
        let house_type_id = violations.take(
            "houseTypeId",
            HouseTypeId::new(&form.house_type_id).map_err(|_| "House type is invalid".to_owned()),
        );
        let owner_id = violations.take(
            "userId",
            form.user_id
                .as_deref()
                .map(UserId::new)
                .transpose()
                .map_err(|_| "User is invalid".to_owned()),
        );

        let draft = match (house_type_id, owner_id) {
            (Some(house_type_id), Some(owner_id)) => Some(Self {
                house_number: form.house_number,
                block: form.block,
                house_type_id,
                owner_id,
            }),
            _ => None,
        };
        violations.into_result(draft)
    }
}
