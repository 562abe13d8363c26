//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use housing::domain::{HouseCatalogService, LocaleStore, PaymentLedgerService, UserAccountService};
use housing::inbound::http::state::{HttpState, HttpStatePorts};
use housing::outbound::persistence::{
    DbPool, DieselHouseRepository, DieselHouseTypeRepository, DieselPaymentRepository,
    DieselUserRepository,
};

use super::ServerConfig;

/// Wire Diesel-backed services onto one shared pool.
fn database_ports(pool: &DbPool) -> HttpStatePorts {
    let clock = Arc::new(DefaultClock);
    let accounts = Arc::new(UserAccountService::new(Arc::new(DieselUserRepository::new(
        pool.clone(),
    ))));
    let catalog = Arc::new(HouseCatalogService::new(
        Arc::new(DieselHouseRepository::new(pool.clone())),
        Arc::new(DieselHouseTypeRepository::new(pool.clone())),
        clock.clone(),
    ));
    let ledger = Arc::new(PaymentLedgerService::new(
        Arc::new(DieselPaymentRepository::new(pool.clone())),
        clock,
    ));

    HttpStatePorts {
        login: accounts.clone(),
        users: accounts,
        houses: catalog.clone(),
        house_types: catalog,
        payments: ledger,
    }
}

/// Build the shared HTTP state, using fixtures when no pool is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = config
        .db_pool
        .as_ref()
        .map_or_else(HttpStatePorts::fixtures, database_ports);
    let locale = LocaleStore::new(config.mode.is_production());
    web::Data::new(HttpState::new(ports, locale))
}
