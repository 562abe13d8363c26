//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::LocaleStore;
use crate::domain::ports::{
    FixtureHouseService, FixtureHouseTypeService, FixtureLoginService, FixturePaymentService,
    FixtureUserService, HouseService, HouseTypeService, LoginService, PaymentService, UserService,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserService>,
    pub houses: Arc<dyn HouseService>,
    pub house_types: Arc<dyn HouseTypeService>,
    pub payments: Arc<dyn PaymentService>,
}

impl HttpStatePorts {
    /// Fixture implementations of every port.
    pub fn fixtures() -> Self {
        Self {
            login: Arc::new(FixtureLoginService),
            users: Arc::new(FixtureUserService),
            houses: Arc::new(FixtureHouseService),
            house_types: Arc::new(FixtureHouseTypeService),
            payments: Arc::new(FixturePaymentService),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserService>,
    pub houses: Arc<dyn HouseService>,
    pub house_types: Arc<dyn HouseTypeService>,
    pub payments: Arc<dyn PaymentService>,
    pub locale: LocaleStore,
}

impl HttpState {
    /// Construct state from a ports bundle and the locale cookie policy.
    ///
    /// # Examples
    /// ```
    /// use housing::domain::LocaleStore;
    /// use housing::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::fixtures(), LocaleStore::new(false));
    /// let _houses = state.houses.clone();
    /// ```
    pub fn new(ports: HttpStatePorts, locale: LocaleStore) -> Self {
        let HttpStatePorts {
            login,
            users,
            houses,
            house_types,
            payments,
        } = ports;
        Self {
            login,
            users,
            houses,
            house_types,
            payments,
            locale,
        }
    }
}
