//! Driving port for payment statistics.

use async_trait::async_trait;

use crate::domain::{Error, PaymentStats, PaymentTotals};

use super::fixture_data::{FIXTURE_STANDARD_PRICE, fixture_houses};

/// Domain use-case port for payment statistics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Revenue and coverage for the current month.
    async fn payment_stats(&self) -> Result<PaymentStats, Error>;
}

/// Fixture payment service: one past payment, nothing paid this month.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePaymentService;

#[async_trait]
impl PaymentService for FixturePaymentService {
    async fn payment_stats(&self) -> Result<PaymentStats, Error> {
        let occupied = u64::try_from(
            fixture_houses()
                .iter()
                .filter(|house| !house.is_available())
                .count(),
        )
        .unwrap_or_default();
        Ok(PaymentStats::from(PaymentTotals {
            total_revenue: FIXTURE_STANDARD_PRICE,
            period_revenue: 0.0,
            period_payments: 0,
            paid_houses: 0,
            occupied_houses: occupied,
        }))
    }
}
