//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives. The document backs Swagger UI in debug
//! builds and is printed by `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ErrorSchema, HouseOwnerSchema, HouseSchema, HouseTypeSchema, HouseTypeSummarySchema,
    PaymentStatsSchema, RoleSchema, SessionUserSchema, SessionViewSchema, UserSchema,
};
use crate::inbound::http::users::{LoginRequest, UpdateProfileRequest};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Housing management API",
        description = "Houses, house types, payments and accounts for a residential estate."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::users::update_current_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::session_view::session_view,
        crate::inbound::http::houses::list_houses,
        crate::inbound::http::houses::available_houses,
        crate::inbound::http::houses::create_house,
        crate::inbound::http::house_types::list_house_types,
        crate::inbound::http::house_types::create_house_type,
        crate::inbound::http::payments::payment_stats,
        crate::inbound::http::payments::unpaid_houses_this_month,
        crate::inbound::http::locale::get_locale,
        crate::inbound::http::locale::set_locale,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        RoleSchema,
        UserSchema,
        SessionUserSchema,
        SessionViewSchema,
        HouseSchema,
        HouseOwnerSchema,
        HouseTypeSchema,
        HouseTypeSummarySchema,
        PaymentStatsSchema,
        LoginRequest,
        UpdateProfileRequest,
    )),
    tags(
        (name = "users", description = "Login, profile and account provisioning"),
        (name = "session", description = "Session state for the UI shell"),
        (name = "houses", description = "Estate inventory"),
        (name = "house-types", description = "Priced house categories"),
        (name = "payments", description = "Monthly fee reporting"),
        (name = "locale", description = "Locale preference cookie"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
