// src/application/commands/kebabs/service.rs
use crate::application::ports::{storage::KebabStore, util::Normalizer};
use std::sync::Arc;

/// Default upper bound for a `POST /kebab` body, in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 1024;

pub struct KebabCommandService {
    pub(super) normalizer: Arc<dyn Normalizer>,
    pub(super) store: Arc<dyn KebabStore>,
    pub(super) body_limit: usize,
}

impl KebabCommandService {
    pub fn new(
        normalizer: Arc<dyn Normalizer>,
        store: Arc<dyn KebabStore>,
        body_limit: usize,
    ) -> Self {
        Self {
            normalizer,
            store,
            body_limit,
        }
    }

    pub fn body_limit(&self) -> usize {
        self.body_limit
    }
}
