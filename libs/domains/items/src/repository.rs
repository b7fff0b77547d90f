use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemPayload};

/// Repository trait for Item persistence
///
/// Implementations map storage failures to [`ItemError::Storage`]. Update and
/// delete do not check that the row exists: touching zero rows is success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item; storage assigns `id_item`
    async fn create(&self, input: ItemPayload) -> ItemResult<Item>;

    /// Overwrite the four business fields of the row with `id`
    async fn update(&self, id: i32, input: ItemPayload) -> ItemResult<()>;

    /// Delete the row with `id`
    async fn delete(&self, id: i32) -> ItemResult<()>;

    /// Fetch one row, or [`ItemError::NotFound`]
    async fn get_by_id(&self, id: i32) -> ItemResult<Item>;

    /// Fetch every row
    async fn get_all(&self) -> ItemResult<Vec<Item>>;
}

/// Process-local repository backed by a `BTreeMap`.
///
/// Ids start at 1 and are never reused. Backs the handler tests.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    items: RwLock<BTreeMap<i32, Item>>,
    next_id: AtomicI32,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: ItemPayload) -> ItemResult<Item> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Item::from_payload(id, input);

        self.items.write().await.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: i32, input: ItemPayload) -> ItemResult<()> {
        if let Some(existing) = self.items.write().await.get_mut(&id) {
            *existing = Item::from_payload(id, input);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> ItemResult<()> {
        self.items.write().await.remove(&id);
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Item> {
        self.items
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ItemError::NotFound(id))
    }

    async fn get_all(&self) -> ItemResult<Vec<Item>> {
        Ok(self.items.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, stok: i32) -> ItemPayload {
        ItemPayload {
            nama_item: name.to_string(),
            unit: "pcs".to_string(),
            stok,
            harga_satuan: 1.5,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryItemRepository::new();

        let first = repo.create(payload("Pen", 1)).await.unwrap();
        let second = repo.create(payload("Book", 2)).await.unwrap();

        assert_eq!(first.id_item, 1);
        assert_eq!(second.id_item, 2);
        assert_eq!(repo.get_by_id(2).await.unwrap().nama_item, "Book");
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(payload("Pen", 1)).await.unwrap();

        repo.update(item.id_item, payload("Pencil", 9)).await.unwrap();

        let updated = repo.get_by_id(item.id_item).await.unwrap();
        assert_eq!(updated.nama_item, "Pencil");
        assert_eq!(updated.stok, 9);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_ok() {
        let repo = InMemoryItemRepository::new();

        assert!(repo.update(42, payload("Ghost", 1)).await.is_ok());
        assert!(repo.delete(42).await.is_ok());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_and_ids_are_not_reused() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(payload("Pen", 1)).await.unwrap();

        repo.delete(item.id_item).await.unwrap();
        assert!(matches!(
            repo.get_by_id(item.id_item).await,
            Err(ItemError::NotFound(1))
        ));

        let next = repo.create(payload("Pen", 1)).await.unwrap();
        assert_eq!(next.id_item, 2);
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let repo = InMemoryItemRepository::default();
        assert_eq!(repo.get_all().await.unwrap(), Vec::<Item>::new());
    }
}
