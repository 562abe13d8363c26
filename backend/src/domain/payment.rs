//! Billing periods and payment statistics.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Calendar month against which a monthly fee is paid.
///
/// ## Invariants
/// - `month` is in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

/// Raised when a month number falls outside `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("month {month} is outside 1..=12")]
pub struct InvalidMonth {
    /// Rejected month number.
    pub month: u32,
}

impl BillingPeriod {
    /// Build a period from a year and a 1-based month.
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidMonth> {
        if (1..=12).contains(&month) {
            Ok(Self { year, month })
        } else {
            Err(InvalidMonth { month })
        }
    }

    /// The UTC calendar month containing `instant`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use housing::domain::BillingPeriod;
    ///
    /// let instant = Utc.with_ymd_and_hms(2026, 10, 31, 23, 59, 59).unwrap();
    /// let period = BillingPeriod::containing(instant);
    /// assert_eq!((period.year(), period.month()), (2026, 10));
    /// ```
    #[must_use]
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-based.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Raw aggregates read from storage for one billing period.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaymentTotals {
    /// Sum of every payment ever recorded.
    pub total_revenue: f64,
    /// Sum of payments for the period.
    pub period_revenue: f64,
    /// Number of payments for the period.
    pub period_payments: u64,
    /// Distinct occupied houses with a payment for the period.
    pub paid_houses: u64,
    /// Houses that currently have an owner.
    pub occupied_houses: u64,
}

/// Dashboard statistics for the current month.
///
/// ## Invariants
/// - `paid_houses_this_month + unpaid_houses_this_month == occupied_houses`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    /// Sum of every payment ever recorded.
    pub total_revenue: f64,
    /// Sum of payments for the current month.
    pub revenue_this_month: f64,
    /// Number of payments for the current month.
    pub payments_this_month: u64,
    /// Houses that currently have an owner.
    pub occupied_houses: u64,
    /// Occupied houses that have paid this month.
    pub paid_houses_this_month: u64,
    /// Occupied houses that have not paid this month.
    pub unpaid_houses_this_month: u64,
}

impl From<PaymentTotals> for PaymentStats {
    fn from(totals: PaymentTotals) -> Self {
        let paid = totals.paid_houses.min(totals.occupied_houses);
        Self {
            total_revenue: totals.total_revenue,
            revenue_this_month: totals.period_revenue,
            payments_this_month: totals.period_payments,
            occupied_houses: totals.occupied_houses,
            paid_houses_this_month: paid,
            unpaid_houses_this_month: totals.occupied_houses - paid,
        }
    }
}
