//! Payment reporting handlers.
//!
//! ```text
//! GET /api/v1/payments/stats
//! GET /api/v1/payments/unpaid-this-month
//! ```

use actix_web::{get, web};

use crate::domain::authorization::PAYMENT_COLLECTORS;
use crate::domain::{House, PaymentStats};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, HouseSchema, PaymentStatsSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Dashboard statistics for the current month.
#[utoipa::path(
    get,
    path = "/api/v1/payments/stats",
    responses(
        (status = 200, description = "Payment statistics", body = PaymentStatsSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "paymentStats"
)]
#[get("/payments/stats")]
pub async fn payment_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<PaymentStats>> {
    session.require_user()?;
    let stats = state.payments.payment_stats().await?;
    Ok(web::Json(stats))
}

/// Occupied houses with no payment recorded for the current month.
#[utoipa::path(
    get,
    path = "/api/v1/payments/unpaid-this-month",
    responses(
        (status = 200, description = "Unpaid houses", body = [HouseSchema]),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "unpaidHousesThisMonth"
)]
#[get("/payments/unpaid-this-month")]
pub async fn unpaid_houses_this_month(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<House>>> {
    session.require_role(PAYMENT_COLLECTORS)?;
    let houses = state.houses.unpaid_houses_this_month().await?;
    Ok(web::Json(houses))
}
