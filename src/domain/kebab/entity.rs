// src/domain/kebab/entity.rs
use super::value_objects::{KebabInput, KebabSlug};

/// An input paired with the slug made from it. This is the record written
/// to storage for every successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kebab {
    pub input: KebabInput,
    pub result: KebabSlug,
}

impl Kebab {
    pub fn new(input: KebabInput, result: KebabSlug) -> Self {
        Self { input, result }
    }
}
