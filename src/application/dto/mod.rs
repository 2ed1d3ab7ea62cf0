pub mod kebabs;

pub use kebabs::{KebabDto, KebabRequest};
