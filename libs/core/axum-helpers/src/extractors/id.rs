//! Integer id extractors for path and query parameters.
//!
//! Ids arrive as text and are parsed here, so a non-numeric id is answered
//! with `400 INVALID_ID` instead of reaching the handler as `0`.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use std::collections::HashMap;

/// Query parameter read by [`IdQuery`]
pub const ID_QUERY_PARAM: &str = "id_item";

/// Parse a decimal id, trimming surrounding whitespace.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}

/// Extractor for a single integer path parameter.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::delete;
/// use axum_helpers::extractors::IdPath;
///
/// async fn delete_item(IdPath(id): IdPath) -> String {
///     format!("Item ID: {}", id)
/// }
///
/// let app = Router::new().route("/item/delete/{id_item}", delete(delete_item));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(e) => return Err(AppError::InvalidId(e.body_text())),
        };

        parse_id(&raw).map(IdPath)
    }
}

/// Extractor for the `id_item` query parameter.
///
/// A missing parameter is treated like an unparsable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdQuery(pub i32);

impl<S> FromRequestParts<S> for IdQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state).await?;

        let raw = params.get(ID_QUERY_PARAM).map(String::as_str).unwrap_or_default();
        parse_id(raw).map(IdQuery)
    }
}
