use crate::{application::ports::util::Normalizer, domain::kebab::kebabify};

#[derive(Default, Clone)]
pub struct KebabNormalizer;

impl Normalizer for KebabNormalizer {
    fn normalize(&self, input: &str) -> String {
        kebabify(input)
    }
}
