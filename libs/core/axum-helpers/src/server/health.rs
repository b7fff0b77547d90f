use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: String,
    pub version: String,
}

#[derive(Clone)]
struct AppInfo {
    name: Arc<str>,
    version: Arc<str>,
}

/// Aggregate the outcome of readiness checks into a response.
///
/// Answers 200 with `"status": "ready"` when every check passed and 503 with
/// `"status": "not ready"` otherwise. Each check name is reported as
/// `connected` or `disconnected`.
///
/// # Example
/// ```ignore
/// let database = check_health(&db).await.map_err(|e| e.to_string());
/// readiness_response(&[("database", database)])
/// ```
pub fn readiness_response(checks: &[(&str, Result<(), String>)]) -> Response {
    let mut all_healthy = true;
    let mut body = serde_json::Map::new();

    for (name, result) in checks {
        let state = match result {
            Ok(()) => "connected",
            Err(e) => {
                tracing::error!("Readiness check failed: {} error: {}", name, e);
                all_healthy = false;
                "disconnected"
            }
        };
        body.insert(name.to_string(), json!(state));
    }

    body.insert(
        "status".to_string(),
        json!(if all_healthy { "ready" } else { "not ready" }),
    );

    let status = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(Value::Object(body))).into_response()
}

/// Health check endpoint handler.
///
/// This endpoint should always return 200 if the service is running.
async fn health_handler(State(app): State<AppInfo>) -> Response {
    let response = HealthResponse {
        status: "healthy",
        name: app.name.to_string(),
        version: app.version.to_string(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Creates a router with the /health endpoint.
///
/// # Example
/// ```ignore
/// use axum_helpers::health_router;
///
/// let app = Router::new()
///     .merge(health_router("Inventory API", env!("CARGO_PKG_VERSION")))
///     .merge(ready_router(state));
/// ```
pub fn health_router(name: impl Into<String>, version: impl Into<String>) -> Router {
    let info = AppInfo {
        name: Arc::from(name.into()),
        version: Arc::from(version.into()),
    };

    Router::new()
        .route("/health", get(health_handler))
        .with_state(info)
}
