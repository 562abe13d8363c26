//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::BillingPeriod;

use super::schema::{house_types, houses, users};

/// Month column value for `period`.
#[expect(clippy::cast_possible_wrap, reason = "months are always 1..=12")]
pub(crate) const fn period_month(period: BillingPeriod) -> i32 {
    period.month() as i32
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: Option<String>,
    pub is_first_login: bool,
}

/// User row plus the stored password hash, read only at login.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserCredentialsRow {
    #[diesel(embed)]
    pub user: UserRow,
    pub password_hash: Option<String>,
}

/// Insertable struct for provisioning accounts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub password_hash: Option<&'a str>,
    pub is_first_login: bool,
}

/// Row struct for reading from the house_types table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = house_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HouseTypeRow {
    pub id: Uuid,
    pub type_name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// House type columns embedded in a house listing.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = house_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HouseTypeSummaryRow {
    pub id: Uuid,
    pub type_name: String,
    pub price: f64,
}

/// Insertable struct for creating house types.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = house_types)]
pub(crate) struct NewHouseTypeRow<'a> {
    pub id: Uuid,
    pub type_name: &'a str,
    pub price: f64,
    pub description: Option<&'a str>,
}

/// Row struct for reading from the houses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = houses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HouseRow {
    pub id: Uuid,
    pub house_number: String,
    pub block: String,
}

/// Insertable struct for creating houses.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = houses)]
pub(crate) struct NewHouseRow<'a> {
    pub id: Uuid,
    pub house_number: &'a str,
    pub block: &'a str,
    pub house_type_id: Uuid,
    pub user_id: Option<Uuid>,
}
