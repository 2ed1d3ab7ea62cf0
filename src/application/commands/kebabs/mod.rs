// src/application/commands/kebabs/mod.rs
mod make;
mod service;

pub use make::MakeKebabCommand;
pub use service::{DEFAULT_BODY_LIMIT, KebabCommandService};
