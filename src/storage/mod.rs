//! 文档存储层
//!
//! 整个成绩簿是一份 JSON 文档，存储后端只负责整份读取与整份写回。

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::StorageConfig;
use crate::errors::{GradingError, Result};
use crate::models::GradebookDocument;

pub mod json_storage;
pub mod memory_storage;
pub mod register;

pub use json_storage::JsonFileStorage;
pub use memory_storage::MemoryStorage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 后端名称（用于日志）
    fn backend_name(&self) -> &'static str;
    // 读取整份文档
    async fn load(&self) -> Result<GradebookDocument>;
    // 覆盖写入整份文档
    async fn save(&self, document: &GradebookDocument) -> Result<()>;
}

/// 读取 - 修改 - 写回
///
/// `apply` 返回错误时不会写回文档。
pub async fn update_document<T, F>(storage: &dyn Storage, apply: F) -> Result<T>
where
    F: FnOnce(&mut GradebookDocument) -> Result<T>,
{
    let mut document = storage.load().await?;
    let value = apply(&mut document)?;
    storage.save(&document).await?;
    Ok(value)
}

/// 根据配置创建存储后端，未知后端回退到 json
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn Storage>> {
    let backend = config.storage_type.as_str();

    if let Some(constructor) = register::get_storage_plugin(backend) {
        let storage = constructor(config.clone()).await?;
        info!("Storage backend '{}' initialized", backend);
        return Ok(Arc::from(storage));
    }

    warn!(
        "Storage backend '{}' not found in registry, falling back to json",
        backend
    );
    let constructor = register::get_storage_plugin("json").ok_or_else(|| {
        GradingError::storage_plugin_not_found(format!(
            "No storage backend available (tried: {backend}, json)"
        ))
    })?;
    let storage = constructor(config.clone()).await?;
    Ok(Arc::from(storage))
}
