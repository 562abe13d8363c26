//! Port abstraction for house-type persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::HouseType;
use crate::domain::forms::HouseTypeForm;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by house-type repository adapters.
    pub enum HouseTypeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "house type repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "house type repository query failed: {message}",
        /// Another house type already uses this name.
        Duplicate { type_name: String } => "house type {type_name} already exists",
    }
}

/// Port for reading and creating house types.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HouseTypeRepository: Send + Sync {
    /// Every house type, ordered by name.
    async fn list_all(&self) -> Result<Vec<HouseType>, HouseTypeRepositoryError>;

    /// Insert a validated house type.
    async fn create(&self, draft: &HouseTypeForm) -> Result<HouseType, HouseTypeRepositoryError>;
}
