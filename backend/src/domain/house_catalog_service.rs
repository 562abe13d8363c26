//! House and house-type domain service.
//!
//! Implements the [`HouseService`] and [`HouseTypeService`] driving ports on
//! top of the repository ports, translating persistence failures into domain
//! errors.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::forms::HouseTypeForm;
use crate::domain::ports::{
    HouseRepository, HouseRepositoryError, HouseService, HouseTypeRepository,
    HouseTypeRepositoryError, HouseTypeService,
};
use crate::domain::{BillingPeriod, Error, House, HouseType, NewHouse};

/// House catalogue backed by repositories.
#[derive(Clone)]
pub struct HouseCatalogService<H, T> {
    houses: Arc<H>,
    house_types: Arc<T>,
    clock: Arc<dyn Clock>,
}

impl<H, T> HouseCatalogService<H, T> {
    /// Create a catalogue over the given repositories.
    ///
    /// `clock` decides which month "this month" is.
    pub fn new(houses: Arc<H>, house_types: Arc<T>, clock: Arc<dyn Clock>) -> Self {
        Self {
            houses,
            house_types,
            clock,
        }
    }

    fn current_period(&self) -> BillingPeriod {
        BillingPeriod::containing(self.clock.utc())
    }
}

fn map_house_error(error: HouseRepositoryError) -> Error {
    match error {
        HouseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("house repository unavailable: {message}"))
        }
        HouseRepositoryError::Query { message } => {
            Error::internal(format!("house repository error: {message}"))
        }
        HouseRepositoryError::MissingReference { field } => {
            Error::invalid_request(format!("Referenced {field} not found"))
        }
        HouseRepositoryError::Duplicate {
            house_number,
            block,
        } => Error::conflict(format!(
            "House {house_number} already exists in block {block}"
        )),
    }
}

fn map_house_type_error(error: HouseTypeRepositoryError) -> Error {
    match error {
        HouseTypeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("house type repository unavailable: {message}"))
        }
        HouseTypeRepositoryError::Query { message } => {
            Error::internal(format!("house type repository error: {message}"))
        }
        HouseTypeRepositoryError::Duplicate { type_name } => {
            Error::conflict(format!("House type {type_name} already exists"))
        }
    }
}

#[async_trait]
impl<H, T> HouseService for HouseCatalogService<H, T>
where
    H: HouseRepository,
    T: HouseTypeRepository,
{
    async fn list_houses(&self) -> Result<Vec<House>, Error> {
        self.houses.list_all().await.map_err(map_house_error)
    }

    async fn available_houses(&self) -> Result<Vec<House>, Error> {
        self.houses.list_unowned().await.map_err(map_house_error)
    }

    async fn unpaid_houses_this_month(&self) -> Result<Vec<House>, Error> {
        let period = self.current_period();
        debug!(%period, "listing unpaid houses");
        self.houses.list_unpaid(period).await.map_err(map_house_error)
    }

    async fn create_house(&self, draft: NewHouse) -> Result<House, Error> {
        self.houses.create(&draft).await.map_err(map_house_error)
    }
}

#[async_trait]
impl<H, T> HouseTypeService for HouseCatalogService<H, T>
where
    H: HouseRepository,
    T: HouseTypeRepository,
{
    async fn list_house_types(&self) -> Result<Vec<HouseType>, Error> {
        self.house_types.list_all().await.map_err(map_house_type_error)
    }

    async fn create_house_type(&self, form: HouseTypeForm) -> Result<HouseType, Error> {
        self.house_types
            .create(&form)
            .await
            .map_err(map_house_type_error)
    }
}

#[cfg(test)]
#[path = "house_catalog_service_tests.rs"]
mod tests;
