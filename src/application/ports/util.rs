// src/application/ports/util.rs
pub trait Normalizer: Send + Sync {
    fn normalize(&self, input: &str) -> String;
}
