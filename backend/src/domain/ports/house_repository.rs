//! Port abstraction for house persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{BillingPeriod, House, NewHouse};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by house repository adapters.
    pub enum HouseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "house repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "house repository query failed: {message}",
        /// A referenced house type or owner does not exist.
        MissingReference { field: String } => "referenced {field} does not exist",
        /// Another house already uses this number within the block.
        Duplicate { house_number: String, block: String } =>
            "house {house_number} already exists in block {block}",
    }
}

/// Port for reading and creating houses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HouseRepository: Send + Sync {
    /// Every house, ordered by block then house number.
    async fn list_all(&self) -> Result<Vec<House>, HouseRepositoryError>;

    /// Houses without an owner, ordered by block then house number.
    async fn list_unowned(&self) -> Result<Vec<House>, HouseRepositoryError>;

    /// Owned houses with no payment recorded for `period`.
    async fn list_unpaid(&self, period: BillingPeriod) -> Result<Vec<House>, HouseRepositoryError>;

    /// Insert a house and return it with its type and owner resolved.
    async fn create(&self, draft: &NewHouse) -> Result<House, HouseRepositoryError>;
}
