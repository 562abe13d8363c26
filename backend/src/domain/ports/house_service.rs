//! Driving port for house listings and creation.
//!
//! Inbound adapters call this port to read the estate's houses without
//! importing persistence details.

use async_trait::async_trait;

use crate::domain::{Error, House, HouseId, HouseOwner, NewHouse};

use super::fixture_data::{fixture_admin, fixture_house_type_summary, fixture_houses};

/// Domain use-case port for houses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HouseService: Send + Sync {
    /// Every house.
    async fn list_houses(&self) -> Result<Vec<House>, Error>;

    /// Houses with no owner.
    async fn available_houses(&self) -> Result<Vec<House>, Error>;

    /// Occupied houses with no payment for the current month.
    async fn unpaid_houses_this_month(&self) -> Result<Vec<House>, Error>;

    /// Create a house from a validated draft.
    async fn create_house(&self, draft: NewHouse) -> Result<House, Error>;
}

/// Fixture house service used when no database is configured.
///
/// The occupied fixture house is always reported as unpaid.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHouseService;

#[async_trait]
impl HouseService for FixtureHouseService {
    async fn list_houses(&self) -> Result<Vec<House>, Error> {
        Ok(fixture_houses())
    }

    async fn available_houses(&self) -> Result<Vec<House>, Error> {
        Ok(fixture_houses()
            .into_iter()
            .filter(House::is_available)
            .collect())
    }

    async fn unpaid_houses_this_month(&self) -> Result<Vec<House>, Error> {
        Ok(fixture_houses()
            .into_iter()
            .filter(|house| !house.is_available())
            .collect())
    }

    async fn create_house(&self, draft: NewHouse) -> Result<House, Error> {
        let house_type = fixture_house_type_summary();
        if draft.house_type_id != house_type.id {
            return Err(Error::invalid_request("House type not found"));
        }
        let admin = fixture_admin();
        let owner = match draft.owner_id {
            None => None,
            Some(id) if id == admin.id => Some(HouseOwner {
                id,
                name: admin.name,
            }),
            Some(_) => return Err(Error::invalid_request("User not found")),
        };
        Ok(House {
            id: HouseId::random(),
            house_number: draft.house_number,
            block: draft.block,
            house_type,
            owner,
        })
    }
}
