//! 进程内存储，用于测试与试运行

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::Result;
use crate::models::GradebookDocument;
use crate::storage::Storage;

#[derive(Default)]
pub struct MemoryStorage {
    document: RwLock<GradebookDocument>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: GradebookDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> Result<GradebookDocument> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: &GradebookDocument) -> Result<()> {
        *self.document.write().await = document.clone();
        debug!(
            "Memory document replaced ({} assignments)",
            document.assignments.len()
        );
        Ok(())
    }
}
