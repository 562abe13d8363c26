//! House type HTTP handlers.
//!
//! ```text
//! GET  /api/v1/house-types
//! POST /api/v1/house-types {"typeName":"Standard","price":500000}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde_json::Value;
use tracing::info;

use crate::domain::HouseType;
use crate::domain::authorization::HOUSE_ADMINS;
use crate::domain::forms::HouseTypeForm;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, HouseTypeSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{form_violations_error, parse_json_body};

/// List house types for any signed-in user.
#[utoipa::path(
    get,
    path = "/api/v1/house-types",
    responses(
        (status = 200, description = "House types", body = [HouseTypeSchema]),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["house-types"],
    operation_id = "listHouseTypes"
)]
#[get("/house-types")]
pub async fn list_house_types(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<HouseType>>> {
    session.require_user()?;
    let house_types = state.house_types.list_house_types().await?;
    Ok(web::Json(house_types))
}

/// Create a house type.
#[utoipa::path(
    post,
    path = "/api/v1/house-types",
    request_body(content = Object, description = "House type form"),
    responses(
        (status = 201, description = "Created house type", body = HouseTypeSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 409, description = "Duplicate type name", body = ErrorSchema)
    ),
    tags = ["house-types"],
    operation_id = "createHouseType"
)]
#[post("/house-types")]
pub async fn create_house_type(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let admin = session.require_role(HOUSE_ADMINS)?;
    let payload: Value = parse_json_body(&body)?;
    let form = HouseTypeForm::parse(&payload).map_err(form_violations_error)?;
    let house_type = state.house_types.create_house_type(form).await?;
    info!(house_type_id = %house_type.id, created_by = %admin.id, "house type created");
    Ok(HttpResponse::Created().json(house_type))
}
