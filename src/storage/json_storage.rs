//! JSON 文件存储
//!
//! 整份文档序列化后先写入同目录的临时文件，再重命名覆盖目标文件，
//! 写入失败时原文件保持不变。

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::errors::{GradingError, Result};
use crate::models::GradebookDocument;
use crate::storage::Storage;

pub struct JsonFileStorage {
    path: PathBuf,
    pretty: bool,
    // 同一进程内的写入串行化
    write_lock: Mutex<()>,
}

impl JsonFileStorage {
    /// 打开 JSON 文件存储，文件不存在时创建空文档
    pub async fn open(config: &StorageConfig) -> Result<Self> {
        if config.path.trim().is_empty() {
            return Err(GradingError::storage_config(
                "storage.path must not be empty for the json backend",
            ));
        }

        let storage = Self {
            path: PathBuf::from(&config.path),
            pretty: config.pretty,
            write_lock: Mutex::new(()),
        };
        storage.ensure_initialized().await?;
        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 解码文档内容，空白内容视为空文档
    pub fn decode(raw: &str) -> Result<GradebookDocument> {
        if raw.trim().is_empty() {
            return Ok(GradebookDocument::default());
        }
        serde_json::from_str(raw)
            .map_err(|e| GradingError::serialization(format!("Failed to decode JSON: {e}")))
    }

    fn encode(&self, document: &GradebookDocument) -> Result<Vec<u8>> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(document)
        } else {
            serde_json::to_vec(document)
        };
        encoded.map_err(|e| GradingError::serialization(format!("Failed to encode JSON data: {e}")))
    }

    async fn ensure_initialized(&self) -> Result<()> {
        let exists = fs::try_exists(&self.path).await.map_err(|e| {
            GradingError::file_operation(format!(
                "Failed to access {}: {e}",
                self.path.display()
            ))
        })?;
        if exists {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }
        self.write_document(&GradebookDocument::default()).await?;
        info!("Created empty gradebook at {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write_document(&self, document: &GradebookDocument) -> Result<()> {
        let bytes = self.encode(document)?;
        let _guard = self.write_lock.lock().await;

        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes)
            .await
            .map_err(|e| GradingError::file_operation(format!("Failed to write to JSON file: {e}")))?;
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                warn!("Failed to remove {}: {cleanup}", temp_path.display());
            }
            return Err(GradingError::file_operation(format!(
                "Failed to replace JSON file: {e}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    fn backend_name(&self) -> &'static str {
        "json"
    }

    async fn load(&self) -> Result<GradebookDocument> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let document = Self::decode(&raw)?;
                debug!(
                    "Loaded {} assignments from {}",
                    document.assignments.len(),
                    self.path.display()
                );
                Ok(document)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, using empty gradebook", self.path.display());
                Ok(GradebookDocument::default())
            }
            Err(e) => Err(GradingError::file_operation(format!(
                "Failed to read JSON file: {e}"
            ))),
        }
    }

    async fn save(&self, document: &GradebookDocument) -> Result<()> {
        self.write_document(document).await?;
        debug!("Saved gradebook to {}", self.path.display());
        Ok(())
    }
}
