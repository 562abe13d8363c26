//! User and authentication handlers.
//!
//! ```text
//! POST  /api/v1/login {"email":"admin@example.com","password":"password"}
//! POST  /api/v1/logout
//! GET   /api/v1/users/me
//! PATCH /api/v1/users/me {"phone":"0812-3456-7890"}
//! POST  /api/v1/users {"name":"Siti Rahma","email":"siti@example.com","role":"USER"}
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::domain::authorization::USER_ADMINS;
use crate::domain::forms::UserForm;
use crate::domain::{
    Error, ErrorCode, LoginCredentials, LoginValidationError, ProfileUpdate, SessionUser, User,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SessionUserSchema, UserSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{form_violations_error, parse_json_body};

/// Message returned when a profile update fails without a client-facing
/// reason.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update user";

/// Login request body for `POST /api/v1/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

/// Self-service profile changes for `PATCH /api/v1/users/me`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    /// New phone number; missing, `null` and `""` all clear it.
    pub phone: Option<String>,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let field = match err {
        LoginValidationError::EmptyEmail => "email",
        LoginValidationError::EmptyPassword => "password",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SessionUserSchema,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Blank email or password", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionUser>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let user = state.login.authenticate(&credentials).await?;
    let snapshot = SessionUser::from(&user);
    session.persist_user(&snapshot)?;
    info!(user_id = %snapshot.id, role = %snapshot.role, "session established");
    Ok(web::Json(snapshot))
}

/// Destroy the current session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 200, description = "Session purged")),
    tags = ["users"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().json(json!({ "success": true }))
}

/// Profile of the signed-in user.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Current user", body = UserSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "User no longer exists", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<User>> {
    let user = session.require_user()?;
    let profile = state.users.profile(&user.id).await?;
    Ok(web::Json(profile))
}

/// Update the signed-in user's phone number.
#[utoipa::path(
    patch,
    path = "/api/v1/users/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Update failed", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateCurrentUser"
)]
#[patch("/users/me")]
pub async fn update_current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let user = session.require_user()?;
    let payload: UpdateProfileRequest = parse_json_body(&body)?;
    let update = ProfileUpdate::from_phone(payload.phone.as_deref());
    state
        .users
        .update_profile(&user.id, update)
        .await
        .map(web::Json)
        .map_err(map_update_error)
}

fn map_update_error(err: Error) -> Error {
    warn!(code = ?err.code(), message = %err.message(), "profile update failed");
    match err.code() {
        ErrorCode::InternalError | ErrorCode::ServiceUnavailable => {
            Error::invalid_request(UPDATE_FAILED_MESSAGE)
        }
        _ => Error::invalid_request(err.message()),
    }
}

/// Provision a user account.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body(content = Object, description = "User form"),
    responses(
        (status = 201, description = "Created user", body = UserSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 403, description = "Forbidden", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    session.require_role(USER_ADMINS)?;
    let payload: Value = parse_json_body(&body)?;
    let form = UserForm::parse(&payload).map_err(form_violations_error)?;
    let user = state.users.create_user(form).await?;
    Ok(HttpResponse::Created().json(user))
}
