//! Port abstraction for payment aggregates.

use async_trait::async_trait;

use crate::domain::{BillingPeriod, PaymentTotals};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by payment repository adapters.
    pub enum PaymentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "payment repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "payment repository query failed: {message}",
    }
}

/// Port for payment aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Revenue and coverage figures for `period`.
    async fn totals(&self, period: BillingPeriod) -> Result<PaymentTotals, PaymentRepositoryError>;
}
