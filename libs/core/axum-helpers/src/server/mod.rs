//! Server infrastructure module.
//!
//! This module provides:
//! - Application setup with OpenAPI documentation
//! - Health and readiness endpoints
//! - Graceful shutdown on Ctrl+C / SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::server::ServerConfig;
//!
//! // API routes under /api/v1, health endpoints at the root
//! let health = health_router("Inventory API", env!("CARGO_PKG_VERSION"));
//! let app = create_router::<ApiDoc>("/api/v1", api_routes, health);
//!
//! // Start server with graceful shutdown
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router, readiness_response};
pub use shutdown::shutdown_signal;
