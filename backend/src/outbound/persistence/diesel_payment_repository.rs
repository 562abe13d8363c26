//! PostgreSQL-backed `PaymentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::dsl::{count_distinct, count_star, sum};
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;

use crate::domain::ports::{PaymentRepository, PaymentRepositoryError};
use crate::domain::{BillingPeriod, PaymentTotals};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::period_month;
use super::pool::{DbPool, PoolError};
use super::schema::{houses, payments};

/// Diesel-backed implementation of the `PaymentRepository` port.
#[derive(Clone)]
pub struct DieselPaymentRepository {
    pool: DbPool,
}

impl DieselPaymentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PaymentRepositoryError {
    PaymentRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> PaymentRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => PaymentRepositoryError::connection(message),
        other => PaymentRepositoryError::query(other.message()),
    }
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

#[async_trait]
impl PaymentRepository for DieselPaymentRepository {
    /// Read every aggregate in one transaction so the figures agree.
    async fn totals(&self, period: BillingPeriod) -> Result<PaymentTotals, PaymentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let year = period.year();
        let month = period_month(period);

        conn.transaction(|conn| {
            async move {
                let total_revenue: Option<f64> = payments::table
                    .select(sum(payments::amount))
                    .get_result(conn)
                    .await?;

                let (period_revenue, period_payments): (Option<f64>, i64) = payments::table
                    .filter(payments::period_year.eq(year))
                    .filter(payments::period_month.eq(month))
                    .select((sum(payments::amount), count_star()))
                    .get_result(conn)
                    .await?;

                let paid_houses: i64 = payments::table
                    .inner_join(houses::table)
                    .filter(houses::user_id.is_not_null())
                    .filter(payments::period_year.eq(year))
                    .filter(payments::period_month.eq(month))
                    .select(count_distinct(payments::house_id))
                    .get_result(conn)
                    .await?;

                let occupied_houses: i64 = houses::table
                    .filter(houses::user_id.is_not_null())
                    .count()
                    .get_result(conn)
                    .await?;

                Ok::<_, diesel::result::Error>(PaymentTotals {
                    total_revenue: total_revenue.unwrap_or_default(),
                    period_revenue: period_revenue.unwrap_or_default(),
                    period_payments: to_count(period_payments),
                    paid_houses: to_count(paid_houses),
                    occupied_houses: to_count(occupied_houses),
                })
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(42, 42)]
    #[case(-1, 0)]
    fn counts_never_go_negative(#[case] raw: i64, #[case] expected: u64) {
        assert_eq!(to_count(raw), expected);
    }

    #[rstest]
    fn dropped_connections_map_to_connection_errors() {
        let err = map_diesel_error(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new("connection closed".to_owned()),
        ));
        assert!(matches!(err, PaymentRepositoryError::Connection { .. }));
    }
}
