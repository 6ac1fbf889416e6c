use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::ApiResult;
use crate::product::ProductService;
use crate::store::memory::MemoryStore;
use crate::store::mongo::MongoStore;
use crate::store::ProductStore;

/// Shared application state
///
/// Read-only after initialization; every request sees the same config and
/// the same store handle.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Product service (shared across requests)
    pub products: ProductService,
}

impl AppState {
    /// Create state with the store the configuration selects: MongoDB when a
    /// URI is configured, otherwise the in-memory store.
    pub async fn new(config: ServerConfig) -> ApiResult<Self> {
        let store: Arc<dyn ProductStore> = match &config.mongodb_uri {
            Some(uri) => {
                let store = MongoStore::connect(uri, &config.mongodb_db).await?;
                tracing::info!(db = %config.mongodb_db, "Using MongoDB product store");
                Arc::new(store)
            }
            None => {
                tracing::warn!(
                    "PRODUCT_API__MONGODB_URI not set, using in-memory store; \
                     data will not survive a restart"
                );
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self::with_store(config, store))
    }

    /// Create state over an explicit store handle. Used by tests.
    pub fn with_store(config: ServerConfig, store: Arc<dyn ProductStore>) -> Self {
        Self {
            config: Arc::new(config),
            products: ProductService::new(store),
        }
    }
}
