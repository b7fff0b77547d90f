use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{Item, ItemPayload},
    repository::ItemRepository,
};

/// SeaORM-backed repository for any configured SQL backend.
///
/// Each statement runs on its own; nothing is wrapped in a transaction.
/// `get_all` returns rows in whatever order the backend yields them.
#[derive(Clone)]
pub struct DbItemRepository {
    db: DatabaseConnection,
}

impl DbItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for DbItemRepository {
    async fn create(&self, input: ItemPayload) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(id_item = model.id_item, "Inserted item");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: ItemPayload) -> ItemResult<()> {
        let active_model: entity::ActiveModel = input.into();
        let result = entity::Entity::update_many()
            .set(active_model)
            .filter(entity::Column::IdItem.eq(id))
            .exec(&self.db)
            .await?;

        tracing::info!(id_item = id, rows_affected = result.rows_affected, "Updated item");
        Ok(())
    }

    async fn delete(&self, id: i32) -> ItemResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::info!(id_item = id, rows_affected = result.rows_affected, "Deleted item");
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Item> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Item::from)
            .ok_or(ItemError::NotFound(id))
    }

    async fn get_all(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find().all(&self.db).await?;

        Ok(models.into_iter().map(Item::from).collect())
    }
}
