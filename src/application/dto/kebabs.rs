use crate::domain::kebab::Kebab;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{IgnoredAny, MapAccess, Visitor},
};
use std::fmt;
use utoipa::ToSchema;

/// Body accepted by `POST /kebab`.
///
/// The field name is matched case-insensitively, so `input`, `Input` and
/// `INPUT` are all accepted. When the field appears more than once the last
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct KebabRequest {
    /// The text to convert (2-512 characters).
    #[schema(min_length = 2, max_length = 512, example = "Hej alla barn, jag heter Rulle!")]
    pub input: Option<String>,
}

impl KebabRequest {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

impl<'de> Deserialize<'de> for KebabRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(KebabRequestVisitor)
    }
}

struct KebabRequestVisitor;

impl<'de> Visitor<'de> for KebabRequestVisitor {
    type Value = KebabRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with an `input` string field")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut input = None;
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("input") {
                input = map.next_value::<Option<String>>()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(KebabRequest { input })
    }
}

/// The original input together with the slug made from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct KebabDto {
    /// The input exactly as received.
    pub input: String,
    /// The kebab-case result.
    pub result: String,
}

impl From<Kebab> for KebabDto {
    fn from(kebab: Kebab) -> Self {
        Self {
            input: kebab.input.into_inner(),
            result: kebab.result.into_inner(),
        }
    }
}
