//! PostgreSQL-backed `HouseRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{HouseRepository, HouseRepositoryError};
use crate::domain::{
    BillingPeriod, House, HouseId, HouseOwner, HouseTypeId, HouseTypeSummary, NewHouse, UserId,
};

use super::diesel_error_mapping::{
    DieselFailure, HOUSES_BLOCK_NUMBER_KEY, HOUSES_HOUSE_TYPE_FKEY, HOUSES_USER_FKEY,
    classify_diesel_error, pool_error_message,
};
use super::models::{HouseRow, HouseTypeSummaryRow, NewHouseRow, period_month};
use super::pool::{DbPool, PoolError};
use super::schema::{house_types, houses, payments, users};

type HouseListingRow = (HouseRow, HouseTypeSummaryRow, Option<(Uuid, String)>);

/// Houses joined with their type and optional owner, ordered for display.
macro_rules! house_listing {
    () => {
        houses::table
            .inner_join(house_types::table)
            .left_join(users::table)
            .select((
                HouseRow::as_select(),
                HouseTypeSummaryRow::as_select(),
                (users::id, users::name).nullable(),
            ))
            .order_by((houses::block.asc(), houses::house_number.asc()))
    };
}

/// Diesel-backed implementation of the `HouseRepository` port.
#[derive(Clone)]
pub struct DieselHouseRepository {
    pool: DbPool,
}

impl DieselHouseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HouseRepositoryError {
    HouseRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> HouseRepositoryError {
    map_failure(classify_diesel_error(error))
}

fn map_failure(failure: DieselFailure) -> HouseRepositoryError {
    match failure {
        DieselFailure::Connection(message) => HouseRepositoryError::connection(message),
        other => HouseRepositoryError::query(other.message()),
    }
}

fn map_insert_error(draft: &NewHouse, error: diesel::result::Error) -> HouseRepositoryError {
    let failure = classify_diesel_error(error);
    if failure.violates_unique(HOUSES_BLOCK_NUMBER_KEY) {
        HouseRepositoryError::duplicate(draft.house_number.clone(), draft.block.clone())
    } else if failure.violates_foreign_key(HOUSES_HOUSE_TYPE_FKEY) {
        HouseRepositoryError::missing_reference("house type")
    } else if failure.violates_foreign_key(HOUSES_USER_FKEY) {
        HouseRepositoryError::missing_reference("user")
    } else {
        map_failure(failure)
    }
}

fn row_to_house((house, house_type, owner): HouseListingRow) -> House {
    House {
        id: HouseId::from_uuid(house.id),
        house_number: house.house_number,
        block: house.block,
        house_type: HouseTypeSummary {
            id: HouseTypeId::from_uuid(house_type.id),
            type_name: house_type.type_name,
            price: house_type.price,
        },
        owner: owner.map(|(id, name)| HouseOwner {
            id: UserId::from_uuid(id),
            name,
        }),
    }
}

#[async_trait]
impl HouseRepository for DieselHouseRepository {
    async fn list_all(&self) -> Result<Vec<House>, HouseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HouseListingRow> = house_listing!()
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_house).collect())
    }

    async fn list_unowned(&self) -> Result<Vec<House>, HouseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HouseListingRow> = house_listing!()
            .filter(houses::user_id.is_null())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_house).collect())
    }

    async fn list_unpaid(&self, period: BillingPeriod) -> Result<Vec<House>, HouseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let paid = payments::table
            .filter(payments::period_year.eq(period.year()))
            .filter(payments::period_month.eq(period_month(period)))
            .select(payments::house_id);
        let rows: Vec<HouseListingRow> = house_listing!()
            .filter(houses::user_id.is_not_null())
            .filter(houses::id.ne_all(paid))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_house).collect())
    }

    async fn create(&self, draft: &NewHouse) -> Result<House, HouseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewHouseRow {
            id: Uuid::new_v4(),
            house_number: &draft.house_number,
            block: &draft.block,
            house_type_id: *draft.house_type_id.as_uuid(),
            user_id: draft.owner_id.map(|owner| *owner.as_uuid()),
        };

        let id: Uuid = diesel::insert_into(houses::table)
            .values(&row)
            .returning(houses::id)
            .get_result(&mut conn)
            .await
            .map_err(|error| map_insert_error(draft, error))?;

        let created: HouseListingRow = house_listing!()
            .filter(houses::id.eq(id))
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row_to_house(created))
    }
}
