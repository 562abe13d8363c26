//! Domain primitives, services and ports.
//!
//! Purpose: define the strongly typed entities used by the HTTP and
//! persistence layers, the role gate, the form validators and the services
//! implementing the driving ports. Types document their invariants and serde
//! contracts in their own Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifier.
//! - User, SessionUser, Role: accounts and the per-request session snapshot.
//! - House, HouseType: estate inventory.
//! - PaymentStats, BillingPeriod: payment reporting.
//! - Locale, LocaleStore: cookie-backed locale preference.
//! - SessionView: session gate state for the UI shell.

pub mod auth;
pub mod authorization;
pub mod error;
pub mod forms;
mod house;
mod house_catalog_service;
pub mod locale;
mod payment;
mod payment_ledger_service;
pub mod ports;
pub mod session_gate;
mod trace_id;
pub mod user;
mod user_account_service;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::house::{
    House, HouseId, HouseOwner, HouseType, HouseTypeId, HouseTypeSummary, HouseValidationError,
    NewHouse,
};
pub use self::house_catalog_service::HouseCatalogService;
pub use self::locale::{
    CookieOptions, CookieStore, DEFAULT_LOCALE, LOCALE_COOKIE_MAX_AGE, LOCALE_COOKIE_NAME, Locale,
    LocaleStore, MemoryCookieStore, SameSitePolicy, UnsupportedLocale,
};
pub use self::payment::{BillingPeriod, InvalidMonth, PaymentStats, PaymentTotals};
pub use self::payment_ledger_service::PaymentLedgerService;
pub use self::session_gate::{
    GateView, RefreshPolicy, SESSION_REFRESH_POLICY, SessionStatus, SessionView, gate_view,
};
pub use self::trace_id::TraceId;
pub use self::user::{
    NewUser, ProfileUpdate, Role, SessionUser, User, UserCredentials, UserId, UserValidationError,
};
pub use self::user_account_service::{USER_NOT_FOUND_MESSAGE, UserAccountService};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use housing::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("Forbidden"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
