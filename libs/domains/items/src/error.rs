use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    /// No row with this id
    #[error("record not found: item {0}")]
    NotFound(i32),

    /// Any failure surfaced by the persistence layer
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<DbErr> for ItemError {
    fn from(err: DbErr) -> Self {
        ItemError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_becomes_storage() {
        let err: ItemError = DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(err, ItemError::Storage(ref msg) if msg.contains("connection reset")));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ItemError::NotFound(3).to_string(), "record not found: item 3");
    }
}
