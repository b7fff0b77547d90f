//! Relational database connector and utilities
//!
//! Provides connection management and a health check for PostgreSQL and MySQL.

mod config;
mod connector;
mod health;

pub use config::{Driver, SqlConfig};
pub use connector::connect_from_config;
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
