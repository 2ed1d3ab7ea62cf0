// src/application/ports/storage.rs
use crate::{application::ApplicationResult, domain::kebab::Kebab};
use async_trait::async_trait;

/// Write side of the blob storage that records every conversion.
///
/// Each call produces a new, independently named object. Implementations
/// must be safe to call concurrently and never overwrite an existing object.
#[async_trait]
pub trait KebabStore: Send + Sync {
    async fn store(&self, kebab: &Kebab) -> ApplicationResult<()>;
}
