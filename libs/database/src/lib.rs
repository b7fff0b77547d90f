//! Database library providing the relational connection factory
//!
//! Builds a connection URL from configuration, opens a single shared SeaORM
//! pool and exposes a health check for readiness endpoints.
//!
//! # Features
//!
//! - `sql` (default) - PostgreSQL and MySQL support with SeaORM
//! - `config` - Load [`sql::SqlConfig`] through `core_config::FromConfigFile`
//!
//! # Example
//!
//! ```ignore
//! use database::sql::{self, Driver, SqlConfig};
//!
//! let config = SqlConfig::new(Driver::Postgres, "localhost", 5432, "inventory", "app", "secret");
//! let db = sql::connect_from_config(config).await?;
//! sql::check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "sql")]
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
