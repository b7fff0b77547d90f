//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across your API.

pub mod id;
pub mod validated_json;

pub use id::{IdPath, IdQuery, parse_id};
pub use validated_json::ValidatedJson;
