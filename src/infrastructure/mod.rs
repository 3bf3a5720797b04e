//! 基础设施：日志与文档存储

#[cfg(feature = "database")]
pub mod database;
pub mod logger;
pub mod memory;
pub mod store;

use std::sync::Arc;

use crate::config::{StoreBackend, StoreConfig};
use memory::InMemoryDocumentStore;
use store::{DocumentStore, StoreError};

/// 按配置构造存储客户端，由宿主进程持有并注入到各个服务
pub async fn connect_store(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(InMemoryDocumentStore::new())),
        #[cfg(feature = "database")]
        StoreBackend::Postgres => Ok(Arc::new(
            database::PostgresDocumentStore::connect(config).await?,
        )),
        #[cfg(not(feature = "database"))]
        StoreBackend::Postgres => Err(StoreError::Unavailable("postgres".to_string())),
    }
}
