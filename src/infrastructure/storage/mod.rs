// src/infrastructure/storage/mod.rs
mod error;

pub mod azure;
pub mod local;
pub mod memory;

pub use azure::AzureBlobStore;
pub use local::LocalBlobStore;
pub use memory::InMemoryKebabStore;

use crate::{
    application::{
        ApplicationResult, error::ApplicationError, ports::storage::KebabStore,
    },
    config::StorageConfig,
    domain::kebab::Kebab,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct StoredKebab<'a> {
    input: &'a str,
    result: &'a str,
}

/// Serialize a kebab into the JSON document written to storage.
pub fn encode(kebab: &Kebab) -> ApplicationResult<Vec<u8>> {
    let doc = StoredKebab {
        input: kebab.input.as_str(),
        result: kebab.result.as_str(),
    };
    serde_json::to_vec(&doc)
        .map_err(|err| ApplicationError::infrastructure(format!("encode kebab: {err}")))
}

/// Fresh random object name, `<uuid>.json`.
pub fn new_blob_name() -> String {
    format!("{}.json", Uuid::new_v4())
}

pub fn build_store(config: &StorageConfig) -> anyhow::Result<Arc<dyn KebabStore>> {
    let store: Arc<dyn KebabStore> = match config {
        StorageConfig::Local { root, container } => {
            tracing::info!(root = %root.display(), container = %container, "using local blob store");
            Arc::new(LocalBlobStore::new(root.join(container)))
        }
        StorageConfig::Azure {
            container_url,
            sas_token,
        } => {
            let without_query = container_url.split('?').next().unwrap_or_default();
            tracing::info!(container_url = %without_query, "using azure blob store");
            Arc::new(AzureBlobStore::new(container_url, sas_token.clone())?)
        }
        StorageConfig::Memory => {
            tracing::warn!("using in-memory blob store; kebabs are not persisted");
            Arc::new(InMemoryKebabStore::default())
        }
    };
    Ok(store)
}
