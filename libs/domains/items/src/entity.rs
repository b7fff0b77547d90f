use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::models::{Item, ItemPayload};

/// Sea-ORM Entity for the `item` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_item: i32,
    pub nama_item: String,
    pub unit: String,
    pub stok: i32,
    #[sea_orm(column_type = "Double")]
    pub harga_satuan: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id_item: model.id_item,
            nama_item: model.nama_item,
            unit: model.unit,
            stok: model.stok,
            harga_satuan: model.harga_satuan,
        }
    }
}

/// The key is left unset: storage assigns it on insert, and updates never
/// touch it.
impl From<ItemPayload> for ActiveModel {
    fn from(payload: ItemPayload) -> Self {
        Self {
            id_item: NotSet,
            nama_item: Set(payload.nama_item),
            unit: Set(payload.unit),
            stok: Set(payload.stok),
            harga_satuan: Set(payload.harga_satuan),
        }
    }
}
