// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::kebabs::KebabCommandService,
    ports::{storage::KebabStore, util::Normalizer},
};

pub struct ApplicationServices {
    pub kebab_commands: Arc<KebabCommandService>,
}

impl ApplicationServices {
    pub fn new(
        normalizer: Arc<dyn Normalizer>,
        store: Arc<dyn KebabStore>,
        body_limit: usize,
    ) -> Self {
        let kebab_commands = Arc::new(KebabCommandService::new(normalizer, store, body_limit));

        Self { kebab_commands }
    }

    /// Request body limit enforced by the kebab commands.
    pub fn body_limit(&self) -> usize {
        self.kebab_commands.body_limit()
    }
}
