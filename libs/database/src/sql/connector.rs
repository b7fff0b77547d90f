use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use super::SqlConfig;
use crate::common::DatabaseResult;

/// Open the shared connection pool described by `config`.
///
/// Statements are not wrapped in an implicit transaction: every write
/// commits on its own. There is no retry; callers treat an error as fatal.
///
/// # Example
/// ```ignore
/// use database::sql::{SqlConfig, connect_from_config};
///
/// let config = SqlConfig::from_config_file(&file)?;
/// let db = connect_from_config(config).await?;
/// ```
pub async fn connect_from_config(config: SqlConfig) -> DatabaseResult<DatabaseConnection> {
    let target = config.redacted_url();
    info!(driver = %config.driver, "Connecting to {}", target);

    let db = Database::connect(config.into_connect_options()).await?;

    info!("Successfully connected to {}", target);
    Ok(db)
}
