// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;
use kebabify::application::ApplicationResult;
use kebabify::application::ports::{storage::KebabStore, util::Normalizer};
use kebabify::domain::errors::DomainError;
use kebabify::domain::kebab::Kebab;

/// Records every `(input, result)` pair it is asked to store.
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingStore {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl KebabStore for RecordingStore {
    async fn store(&self, kebab: &Kebab) -> ApplicationResult<()> {
        self.calls.lock().unwrap().push((
            kebab.input.as_str().to_string(),
            kebab.result.as_str().to_string(),
        ));
        Ok(())
    }
}

pub struct FailingStore;

#[async_trait]
impl KebabStore for FailingStore {
    async fn store(&self, _kebab: &Kebab) -> ApplicationResult<()> {
        Err(DomainError::Persistence("blob service unavailable".into()).into())
    }
}

/// Returns a canned slug and remembers what it was asked to normalize.
pub struct StubNormalizer {
    output: String,
    calls: Mutex<Vec<String>>,
}

impl StubNormalizer {
    pub fn returning(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Normalizer for StubNormalizer {
    fn normalize(&self, input: &str) -> String {
        self.calls.lock().unwrap().push(input.to_string());
        self.output.clone()
    }
}
