//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod house_types;
pub mod houses;
pub mod locale;
pub mod payments;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod session_view;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// JSON extractor settings shared by every handler.
///
/// Malformed bodies surface as `400 {"error":"Invalid JSON body"}` instead of
/// actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| validation::invalid_json_error(err).into())
}

/// Register every `/api/v1` route on `cfg`.
///
/// `/houses/available` is registered ahead of any future `/houses/{id}`
/// route so the literal segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(houses::available_houses)
        .service(houses::list_houses)
        .service(houses::create_house)
        .service(house_types::list_house_types)
        .service(house_types::create_house_type)
        .service(payments::payment_stats)
        .service(payments::unpaid_houses_this_month)
        .service(users::login)
        .service(users::logout)
        .service(users::current_user)
        .service(users::update_current_user)
        .service(users::create_user)
        .service(locale::get_locale)
        .service(locale::set_locale)
        .service(session_view::session_view);
}
