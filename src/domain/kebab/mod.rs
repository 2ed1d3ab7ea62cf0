// src/domain/kebab/mod.rs
pub mod entity;
pub mod normalizer;
pub mod value_objects;

pub use entity::Kebab;
pub use normalizer::kebabify;
pub use value_objects::{KebabInput, KebabSlug};
