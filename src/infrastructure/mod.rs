// src/infrastructure/mod.rs
pub mod storage;
pub mod util;
