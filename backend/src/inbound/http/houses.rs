//! House HTTP handlers.
//!
//! ```text
//! GET  /api/v1/houses
//! GET  /api/v1/houses/available
//! POST /api/v1/houses {"houseNumber":"12","block":"B1","houseTypeId":"…"}
//! ```
//!
//! Every route here is administrator-only; anonymous callers also receive
//! `403 Forbidden`.

use actix_web::{HttpResponse, get, post, web};
use serde_json::Value;
use tracing::info;

use crate::domain::authorization::HOUSE_ADMINS;
use crate::domain::forms::HouseForm;
use crate::domain::{House, NewHouse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, HouseSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{form_violations_error, parse_json_body};

/// List every house.
#[utoipa::path(
    get,
    path = "/api/v1/houses",
    responses(
        (status = 200, description = "All houses", body = [HouseSchema]),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["houses"],
    operation_id = "listHouses"
)]
#[get("/houses")]
pub async fn list_houses(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<House>>> {
    session.require_role(HOUSE_ADMINS)?;
    let houses = state.houses.list_houses().await?;
    Ok(web::Json(houses))
}

/// List houses without an owner.
#[utoipa::path(
    get,
    path = "/api/v1/houses/available",
    responses(
        (status = 200, description = "Houses with no owner", body = [HouseSchema]),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["houses"],
    operation_id = "listAvailableHouses"
)]
#[get("/houses/available")]
pub async fn available_houses(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<House>>> {
    session.require_role(HOUSE_ADMINS)?;
    let houses = state.houses.available_houses().await?;
    Ok(web::Json(houses))
}

/// Create a house.
#[utoipa::path(
    post,
    path = "/api/v1/houses",
    request_body(content = Object, description = "House form"),
    responses(
        (status = 201, description = "Created house", body = HouseSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 409, description = "Duplicate house", body = ErrorSchema)
    ),
    tags = ["houses"],
    operation_id = "createHouse"
)]
#[post("/houses")]
pub async fn create_house(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let admin = session.require_role(HOUSE_ADMINS)?;
    let payload: Value = parse_json_body(&body)?;
    let draft = HouseForm::parse(&payload)
        .and_then(NewHouse::try_from)
        .map_err(form_violations_error)?;
    let house = state.houses.create_house(draft).await?;
    info!(house_id = %house.id, created_by = %admin.id, "house created");
    Ok(HttpResponse::Created().json(house))
}

#[cfg(test)]
#[path = "houses_tests.rs"]
mod tests;
