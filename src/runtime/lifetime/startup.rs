use crate::config::StorageConfig;
use crate::errors::Result;
use crate::storage::{Storage, create_storage, register::debug_storage_registry};
use std::sync::Arc;
use tracing::{debug, info};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备运行所需的上下文（存储后端等）
pub async fn prepare_startup(storage_config: &StorageConfig) -> Result<StartupContext> {
    if cfg!(debug_assertions) {
        debug_storage_registry();
        debug!("Debug mode: Storage registry is enabled");
    }

    let storage = create_storage(storage_config).await?;
    info!(
        "Storage backend '{}' ready (path: {})",
        storage.backend_name(),
        storage_config.path
    );

    Ok(StartupContext { storage })
}
