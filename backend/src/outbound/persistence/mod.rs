//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: database failures are classified once and mapped to
//!   each port's error enum.
//!
//! # Example
//!
//! ```ignore
//! use housing::outbound::persistence::{DbPool, DieselHouseRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/housing")).await?;
//! let houses = DieselHouseRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_house_repository;
mod diesel_house_type_repository;
mod diesel_payment_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_house_repository::DieselHouseRepository;
pub use diesel_house_type_repository::DieselHouseTypeRepository;
pub use diesel_payment_repository::DieselPaymentRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
