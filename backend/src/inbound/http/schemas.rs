//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and are registered with utoipa in
//! place of the domain types.

use utoipa::ToSchema;

/// OpenAPI schema for the error body produced from [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message; internal failures read "Internal server error".
    #[schema(example = "Forbidden")]
    error: String,
    /// Supplementary details, such as form violations.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Role`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Role)]
pub enum RoleSchema {
    #[schema(rename = "ADMIN")]
    Admin,
    #[schema(rename = "STAFF")]
    Staff,
    #[schema(rename = "USER")]
    User,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Siti Rahma")]
    name: String,
    #[schema(example = "siti@example.com")]
    email: String,
    role: RoleSchema,
    #[schema(example = "0812-3456-7890")]
    phone: Option<String>,
    is_first_login: bool,
}

/// OpenAPI schema for [`crate::domain::SessionUser`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SessionUser, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SessionUserSchema {
    id: String,
    name: String,
    email: String,
    role: RoleSchema,
    is_first_login: bool,
}

/// OpenAPI schema for [`crate::domain::HouseType`].
#[derive(ToSchema)]
#[schema(as = crate::domain::HouseType, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HouseTypeSchema {
    id: String,
    #[schema(example = "Standard")]
    type_name: String,
    #[schema(example = 500000.0)]
    price: f64,
    description: Option<String>,
}

/// OpenAPI schema for [`crate::domain::HouseTypeSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::HouseTypeSummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HouseTypeSummarySchema {
    id: String,
    type_name: String,
    price: f64,
}

/// OpenAPI schema for [`crate::domain::HouseOwner`].
#[derive(ToSchema)]
#[schema(as = crate::domain::HouseOwner)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HouseOwnerSchema {
    id: String,
    name: String,
}

/// OpenAPI schema for [`crate::domain::House`].
#[derive(ToSchema)]
#[schema(as = crate::domain::House, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HouseSchema {
    id: String,
    #[schema(example = "12")]
    house_number: String,
    #[schema(example = "B1")]
    block: String,
    house_type: HouseTypeSummarySchema,
    /// Absent owner means the house is available.
    owner: Option<HouseOwnerSchema>,
}

/// OpenAPI schema for [`crate::domain::PaymentStats`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PaymentStats, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PaymentStatsSchema {
    total_revenue: f64,
    revenue_this_month: f64,
    payments_this_month: u64,
    occupied_houses: u64,
    paid_houses_this_month: u64,
    unpaid_houses_this_month: u64,
}

/// OpenAPI schema for [`crate::domain::SessionView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SessionView, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SessionViewSchema {
    /// `loading`, `authenticated` or `unauthenticated`.
    #[schema(example = "authenticated")]
    status: String,
    /// `loading` or `content`.
    #[schema(example = "content")]
    view: String,
    user: Option<SessionUserSchema>,
    #[schema(example = 300)]
    refetch_interval_seconds: u64,
    refetch_on_window_focus: bool,
}
