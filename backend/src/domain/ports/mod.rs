//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by persistence adapters and
//! expose typed errors generated by [`define_port_error!`]. Driving ports
//! (`*Service`) are what inbound adapters call; each has a `Fixture*`
//! implementation for running without a database.

mod macros;
pub(crate) use macros::define_port_error;

mod fixture_data;
mod house_repository;
mod house_service;
mod house_type_repository;
mod house_type_service;
mod login_service;
mod payment_repository;
mod payment_service;
mod user_repository;
mod user_service;

pub use fixture_data::{
    FIXTURE_ADMIN_EMAIL, FIXTURE_ADMIN_PASSWORD, FIXTURE_STANDARD_PRICE, fixture_admin,
    fixture_house_type, fixture_houses,
};
#[cfg(test)]
pub use house_repository::MockHouseRepository;
pub use house_repository::{HouseRepository, HouseRepositoryError};
#[cfg(test)]
pub use house_service::MockHouseService;
pub use house_service::{FixtureHouseService, HouseService};
#[cfg(test)]
pub use house_type_repository::MockHouseTypeRepository;
pub use house_type_repository::{HouseTypeRepository, HouseTypeRepositoryError};
#[cfg(test)]
pub use house_type_service::MockHouseTypeService;
pub use house_type_service::{FixtureHouseTypeService, HouseTypeService};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, INVALID_CREDENTIALS_MESSAGE, LoginService};
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
pub use payment_repository::{PaymentRepository, PaymentRepositoryError};
#[cfg(test)]
pub use payment_service::MockPaymentService;
pub use payment_service::{FixturePaymentService, PaymentService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::{FixtureUserService, UserService};
