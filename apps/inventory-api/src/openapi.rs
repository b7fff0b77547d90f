//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "REST API for managing inventory items. Every bound request answers HTTP 200; the outcome is in the `{status, messages, data}` envelope."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Inventory item endpoints")
    )
)]
pub struct ApiDoc;
