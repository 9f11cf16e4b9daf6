//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//! private to this module; the repository translates them into domain
//! types. Connections come from a `bb8` pool through `diesel-async`.
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/directory")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::run_pending_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
