use crate::config::StorageConfig;
use crate::errors::Result;
use crate::storage::{JsonFileStorage, MemoryStorage, Storage};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedStorageFuture = Pin<Box<dyn Future<Output = Result<Box<dyn Storage>>> + Send>>;
pub type StorageConstructor = Arc<dyn Fn(StorageConfig) -> BoxedStorageFuture + Send + Sync>;

static STORAGE_REGISTRY: Lazy<RwLock<HashMap<String, StorageConstructor>>> = Lazy::new(|| {
    let mut registry: HashMap<String, StorageConstructor> = HashMap::new();

    let json: StorageConstructor = Arc::new(|config: StorageConfig| -> BoxedStorageFuture {
        Box::pin(async move {
            let storage = JsonFileStorage::open(&config).await?;
            Ok(Box::new(storage) as Box<dyn Storage>)
        })
    });
    let memory: StorageConstructor = Arc::new(|_config: StorageConfig| -> BoxedStorageFuture {
        Box::pin(async move { Ok(Box::new(MemoryStorage::new()) as Box<dyn Storage>) })
    });

    registry.insert("json".to_string(), json);
    registry.insert("memory".to_string(), memory);
    RwLock::new(registry)
});

pub fn register_storage_plugin<S: Into<String>>(name: S, constructor: StorageConstructor) {
    let name = name.into();
    let mut registry = STORAGE_REGISTRY
        .write()
        .expect("Storage registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_storage_plugin(name: &str) -> Option<StorageConstructor> {
    STORAGE_REGISTRY
        .read()
        .expect("Storage registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_storage_registry() {
    let registry = STORAGE_REGISTRY
        .read()
        .expect("Storage registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No storage plugins registered.");
    } else {
        tracing::debug!("Registered storage plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}
