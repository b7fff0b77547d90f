//! Application state management.

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// Cloning is cheap: the connection is a handle to one shared pool.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: crate::config::Config,
    /// SeaORM connection pool
    pub db: DatabaseConnection,
}
