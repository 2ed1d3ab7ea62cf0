// src/domain/kebab/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Raw text submitted for conversion, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KebabInput(String);

impl KebabInput {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 512;

    /// Length is counted in UTF-16 code units on the untrimmed value, so a
    /// character outside the Basic Multilingual Plane counts as two.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("input cannot be empty".into()));
        }

        let len = value.encode_utf16().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(DomainError::Validation(Self::length_message()));
        }

        Ok(Self(value))
    }

    pub fn length_message() -> String {
        format!(
            "The field Input must be a string with a minimum length of {} and a maximum length of {}.",
            Self::MIN_LEN,
            Self::MAX_LEN
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for KebabInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized slug. Either empty or lowercase ASCII alphanumeric segments
/// joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KebabSlug(String);

impl KebabSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !Self::is_well_formed(&value) {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a kebab-case slug"
            )));
        }
        Ok(Self(value))
    }

    fn is_well_formed(value: &str) -> bool {
        value.is_empty()
            || value.split('-').all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for KebabSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
