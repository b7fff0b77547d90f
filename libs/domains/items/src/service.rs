//! Item Service - wraps repository outcomes in the response envelope
//!
//! | Operation | Success                                 | Failure                               |
//! |-----------|-----------------------------------------|---------------------------------------|
//! | create    | 200 "Success to create a new item"      | 400 "Failed to create a new item"     |
//! | update    | 200 "Success to update item"            | 400 "Failed to update item: {id}"     |
//! | delete    | 200 "Success to delete item"            | 400 "Failed to delete item: {id}"     |
//! | get_all   | 200 "Success to get all item"           | 400 "Failed to get all item"          |
//! | get_by_id | 200 "Success to get all item"           | 404 "Item {id} not found"             |

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::models::{Item, ItemPayload};
use crate::repository::ItemRepository;
use crate::response::ApiResponse;

/// Item operations as seen by the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemService: Send + Sync {
    async fn create(&self, input: ItemPayload) -> ApiResponse<Item>;

    async fn update(&self, id: i32, input: ItemPayload) -> ApiResponse<Item>;

    async fn delete(&self, id: i32) -> ApiResponse<Item>;

    async fn get_all(&self) -> ApiResponse<Vec<Item>>;

    async fn get_by_id(&self, id: i32) -> ApiResponse<Item>;
}

/// Repository-backed [`ItemService`]
pub struct DefaultItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> DefaultItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

impl<R: ItemRepository> Clone for DefaultItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: ItemRepository> ItemService for DefaultItemService<R> {
    #[instrument(skip(self, input), fields(nama_item = %input.nama_item))]
    async fn create(&self, input: ItemPayload) -> ApiResponse<Item> {
        match self.repository.create(input).await {
            Ok(_) => ApiResponse::success("Success to create a new item", None),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create item");
                ApiResponse::failure(400, "Failed to create a new item")
            }
        }
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i32, input: ItemPayload) -> ApiResponse<Item> {
        match self.repository.update(id, input).await {
            Ok(()) => ApiResponse::success("Success to update item", None),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to update item");
                ApiResponse::failure(400, format!("Failed to update item: {}", id))
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> ApiResponse<Item> {
        match self.repository.delete(id).await {
            Ok(()) => ApiResponse::success("Success to delete item", None),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to delete item");
                ApiResponse::failure(400, format!("Failed to delete item: {}", id))
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> ApiResponse<Vec<Item>> {
        match self.repository.get_all().await {
            Ok(items) => ApiResponse::success("Success to get all item", Some(items)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to get all items");
                ApiResponse::failure(400, "Failed to get all item")
            }
        }
    }

    /// Every repository error, not only a missing row, answers 404.
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> ApiResponse<Item> {
        match self.repository.get_by_id(id).await {
            Ok(item) => ApiResponse::success("Success to get all item", Some(item)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to get item");
                ApiResponse::failure(404, format!("Item {} not found", id))
            }
        }
    }
}
