//! Items API routes
//!
//! This module wires up the items domain to HTTP routes.

use axum::Router;
use domain_items::{DbItemRepository, DefaultItemService, handlers};

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    let repository = DbItemRepository::new(state.db.clone());
    let service = DefaultItemService::new(repository);

    handlers::router(service)
}
