use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state — shared by all request handlers
///
/// Holds the configuration and the storage handle. Cloning is cheap
/// (the pool is reference-counted); handlers receive it through axum's
/// `State` extractor and pass the pool into repository calls, so no
/// global storage handle exists anywhere.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Open the database (applying migrations) and build the state
    ///
    /// Called once at process start; the pool lives until shutdown.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }
}
