//! Payment statistics service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{PaymentRepository, PaymentRepositoryError, PaymentService};
use crate::domain::{BillingPeriod, Error, PaymentStats};

/// Payment ledger backed by a [`PaymentRepository`].
#[derive(Clone)]
pub struct PaymentLedgerService<P> {
    payments: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<P> PaymentLedgerService<P> {
    /// Create a ledger; `clock` decides the current billing period.
    pub fn new(payments: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self { payments, clock }
    }
}

fn map_payment_error(error: PaymentRepositoryError) -> Error {
    match error {
        PaymentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("payment repository unavailable: {message}"))
        }
        PaymentRepositoryError::Query { message } => {
            Error::internal(format!("payment repository error: {message}"))
        }
    }
}

#[async_trait]
impl<P> PaymentService for PaymentLedgerService<P>
where
    P: PaymentRepository,
{
    async fn payment_stats(&self) -> Result<PaymentStats, Error> {
        let period = BillingPeriod::containing(self.clock.utc());
        self.payments
            .totals(period)
            .await
            .map(PaymentStats::from)
            .map_err(map_payment_error)
    }
}
