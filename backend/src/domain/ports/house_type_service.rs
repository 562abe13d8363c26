//! Driving port for house types.

use async_trait::async_trait;

use crate::domain::forms::HouseTypeForm;
use crate::domain::{Error, HouseType, HouseTypeId};

use super::fixture_data::fixture_house_type;

/// Domain use-case port for house types.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HouseTypeService: Send + Sync {
    /// Every house type.
    async fn list_house_types(&self) -> Result<Vec<HouseType>, Error>;

    /// Create a house type from a validated form.
    async fn create_house_type(&self, form: HouseTypeForm) -> Result<HouseType, Error>;
}

/// Fixture house-type service used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHouseTypeService;

#[async_trait]
impl HouseTypeService for FixtureHouseTypeService {
    async fn list_house_types(&self) -> Result<Vec<HouseType>, Error> {
        Ok(vec![fixture_house_type()])
    }

    async fn create_house_type(&self, form: HouseTypeForm) -> Result<HouseType, Error> {
        if form.type_name == fixture_house_type().type_name {
            return Err(Error::conflict("House type already exists"));
        }
        Ok(HouseType {
            id: HouseTypeId::random(),
            type_name: form.type_name,
            price: form.price,
            description: form.description,
        })
    }
}
