//! HTTP handlers for items.
//!
//! Once a request has been bound and validated the handler always answers
//! HTTP 200 with the envelope; the outcome is carried in the envelope
//! `status`. Binding, validation and id-parse failures answer with an
//! [`axum_helpers::ErrorResponse`] and a 4xx status instead, and the service
//! is never called.

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    IdPath, IdQuery, ValidatedJson,
    errors::responses::{BadRequestIdResponse, BadRequestJsonResponse, BadRequestValidationResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Item, ItemPayload};
use crate::response::ApiResponse;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_item,
        update_item,
        delete_item,
        get_all_items,
        get_item_detail,
    ),
    components(
        schemas(Item, ItemPayload),
        responses(BadRequestValidationResponse, BadRequestIdResponse, BadRequestJsonResponse)
    ),
    tags(
        (name = "Items", description = "Inventory item endpoints. HTTP status is 200 for every bound request; see the envelope status.")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<S: ItemService + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/item/create", post(create_item))
        .route("/item/update/{id_item}", put(update_item))
        .route("/item/delete/{id_item}", delete(delete_item))
        .route("/item/get_all", get(get_all_items))
        .route("/item/detail", get(get_item_detail))
        .with_state(shared_service)
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/item/create",
    tag = "Items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Envelope with status 200 or 400; data is null", body = ApiResponse<Item>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = BadRequestJsonResponse)
    )
)]
async fn create_item<S: ItemService>(
    State(service): State<Arc<S>>,
    ValidatedJson(input): ValidatedJson<ItemPayload>,
) -> Json<ApiResponse<Item>> {
    Json(service.create(input).await)
}

/// Overwrite an item's fields
#[utoipa::path(
    put,
    path = "/item/update/{id_item}",
    tag = "Items",
    params(
        ("id_item" = i32, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Envelope with status 200 or 400; data is null", body = ApiResponse<Item>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = BadRequestJsonResponse)
    )
)]
async fn update_item<S: ItemService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ItemPayload>,
) -> Json<ApiResponse<Item>> {
    Json(service.update(id, input).await)
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/item/delete/{id_item}",
    tag = "Items",
    params(
        ("id_item" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Envelope with status 200 or 400; data is null", body = ApiResponse<Item>),
        (status = 400, response = BadRequestIdResponse)
    )
)]
async fn delete_item<S: ItemService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> Json<ApiResponse<Item>> {
    Json(service.delete(id).await)
}

/// List every item
#[utoipa::path(
    get,
    path = "/item/get_all",
    tag = "Items",
    responses(
        (status = 200, description = "Envelope with status 200 or 400", body = ApiResponse<Vec<Item>>)
    )
)]
async fn get_all_items<S: ItemService>(
    State(service): State<Arc<S>>,
) -> Json<ApiResponse<Vec<Item>>> {
    Json(service.get_all().await)
}

/// Get one item by id
#[utoipa::path(
    get,
    path = "/item/detail",
    tag = "Items",
    params(
        ("id_item" = i32, Query, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Envelope with status 200 or 404", body = ApiResponse<Item>),
        (status = 400, response = BadRequestIdResponse)
    )
)]
async fn get_item_detail<S: ItemService>(
    State(service): State<Arc<S>>,
    IdQuery(id): IdQuery,
) -> Json<ApiResponse<Item>> {
    Json(service.get_by_id(id).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockItemService;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn pen() -> ItemPayload {
        ItemPayload {
            nama_item: "Pen".to_string(),
            unit: "pcs".to_string(),
            stok: 10,
            harga_satuan: 2.5,
        }
    }

    #[tokio::test]
    async fn test_create_passes_payload_to_service() {
        let mut service = MockItemService::new();
        service
            .expect_create()
            .with(eq(pen()))
            .times(1)
            .returning(|_| ApiResponse::success("Success to create a new item", None));

        let (status, body) = send(
            router(service),
            json_request(
                "POST",
                "/item/create",
                json!({"nama_item": "Pen", "unit": "pcs", "stok": 10, "harga_satuan": 2.5}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": 200, "messages": "Success to create a new item", "data": null})
        );
    }

    #[tokio::test]
    async fn test_create_invalid_body_skips_service() {
        let mut service = MockItemService::new();
        service.expect_create().times(0);

        let (status, body) = send(
            router(service),
            json_request("POST", "/item/create", json!({"nama_item": "Pen", "stok": 10, "harga_satuan": 2.5})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["unit"].is_array());
    }

    #[tokio::test]
    async fn test_failed_envelope_still_http_200() {
        let mut service = MockItemService::new();
        service
            .expect_delete()
            .with(eq(4))
            .returning(|id| ApiResponse::failure(400, format!("Failed to delete item: {}", id)));

        let request = Request::builder()
            .method("DELETE")
            .uri("/item/delete/4")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router(service), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], 400);
        assert_eq!(body["messages"], "Failed to delete item: 4");
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let mut service = MockItemService::new();
        service
            .expect_update()
            .with(eq(12), eq(pen()))
            .times(1)
            .returning(|_, _| ApiResponse::success("Success to update item", None));

        let (status, body) = send(
            router(service),
            json_request(
                "PUT",
                "/item/update/12",
                json!({"nama_item": "Pen", "unit": "pcs", "stok": 10, "harga_satuan": 2.5}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["messages"], "Success to update item");
    }

    #[tokio::test]
    async fn test_detail_not_found_envelope() {
        let mut service = MockItemService::new();
        service
            .expect_get_by_id()
            .with(eq(77))
            .returning(|id| ApiResponse::failure(404, format!("Item {} not found", id)));

        let request = Request::builder()
            .uri("/item/detail?id_item=77")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router(service), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": 404, "messages": "Item 77 not found", "data": null})
        );
    }

    #[tokio::test]
    async fn test_non_numeric_ids_rejected() {
        let mut service = MockItemService::new();
        service.expect_delete().times(0);
        service.expect_get_by_id().times(0);
        let app = router(service);

        let request = Request::builder()
            .method("DELETE")
            .uri("/item/delete/abc")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid id_item: abc");

        let request = Request::builder()
            .uri("/item/detail?id_item=abc")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_openapi_lists_all_operations() {
        let doc = ApiDoc::openapi();
        for path in [
            "/item/create",
            "/item/update/{id_item}",
            "/item/delete/{id_item}",
            "/item/get_all",
            "/item/detail",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
