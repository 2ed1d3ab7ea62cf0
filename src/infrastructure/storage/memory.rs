use super::{encode, new_blob_name};
use crate::{
    application::{ApplicationResult, ports::storage::KebabStore},
    domain::kebab::Kebab,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Keeps blobs in memory. Useful for local runs and tests.
#[derive(Debug, Default)]
pub struct InMemoryKebabStore {
    blobs: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryKebabStore {
    /// Snapshot of every stored blob keyed by name.
    pub async fn blobs(&self) -> BTreeMap<String, Vec<u8>> {
        self.blobs.read().await.clone()
    }
}

#[async_trait]
impl KebabStore for InMemoryKebabStore {
    async fn store(&self, kebab: &Kebab) -> ApplicationResult<()> {
        let bytes = encode(kebab)?;
        let name = new_blob_name();
        self.blobs.write().await.insert(name, bytes);
        Ok(())
    }
}
