//! Common utilities shared across database backends

pub mod error;

pub use error::{DatabaseError, DatabaseResult};
