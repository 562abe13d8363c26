//! PostgreSQL-backed `HouseTypeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::forms::HouseTypeForm;
use crate::domain::ports::{HouseTypeRepository, HouseTypeRepositoryError};
use crate::domain::{HouseType, HouseTypeId};

use super::diesel_error_mapping::{
    DieselFailure, HOUSE_TYPES_NAME_KEY, classify_diesel_error, pool_error_message,
};
use super::models::{HouseTypeRow, NewHouseTypeRow};
use super::pool::{DbPool, PoolError};
use super::schema::house_types;

/// Diesel-backed implementation of the `HouseTypeRepository` port.
#[derive(Clone)]
pub struct DieselHouseTypeRepository {
    pool: DbPool,
}

impl DieselHouseTypeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HouseTypeRepositoryError {
    HouseTypeRepositoryError::connection(pool_error_message(error))
}

fn map_failure(failure: DieselFailure) -> HouseTypeRepositoryError {
    match failure {
        DieselFailure::Connection(message) => HouseTypeRepositoryError::connection(message),
        other => HouseTypeRepositoryError::query(other.message()),
    }
}

impl From<HouseTypeRow> for HouseType {
    fn from(row: HouseTypeRow) -> Self {
        Self {
            id: HouseTypeId::from_uuid(row.id),
            type_name: row.type_name,
            price: row.price,
            description: row.description,
        }
    }
}

#[async_trait]
impl HouseTypeRepository for DieselHouseTypeRepository {
    async fn list_all(&self) -> Result<Vec<HouseType>, HouseTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HouseTypeRow> = house_types::table
            .select(HouseTypeRow::as_select())
            .order_by(house_types::type_name.asc())
            .load(&mut conn)
            .await
            .map_err(|error| map_failure(classify_diesel_error(error)))?;
        Ok(rows.into_iter().map(HouseType::from).collect())
    }

    async fn create(&self, draft: &HouseTypeForm) -> Result<HouseType, HouseTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewHouseTypeRow {
            id: Uuid::new_v4(),
            type_name: &draft.type_name,
            price: draft.price,
            description: draft.description.as_deref(),
        };

        diesel::insert_into(house_types::table)
            .values(&row)
            .returning(HouseTypeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(HouseType::from)
            .map_err(|error| match classify_diesel_error(error) {
                failure if failure.violates_unique(HOUSE_TYPES_NAME_KEY) => {
                    HouseTypeRepositoryError::duplicate(draft.type_name.clone())
                }
                other => map_failure(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rows_convert_to_house_types() {
        let id = Uuid::new_v4();
        let house_type = HouseType::from(HouseTypeRow {
            id,
            type_name: "Premium".to_owned(),
            price: 750_000.0,
            description: None,
        });
        assert_eq!(house_type.id.as_uuid(), &id);
        assert_eq!(house_type.type_name, "Premium");
        assert!(house_type.description.is_none());
    }

    #[rstest]
    fn connection_failures_stay_connection_errors() {
        let err = map_failure(DieselFailure::Connection("database connection error"));
        assert!(matches!(err, HouseTypeRepositoryError::Connection { .. }));
    }
}
