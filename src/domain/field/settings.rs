// src/domain/field/settings.rs
use serde_json::Value;

use crate::domain::content_type::FieldSettings;

pub const SOURCE_SETTING: &str = "source";

/// Typed view over a slug field's settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugFieldSettings {
    /// Identifier of the field whose value feeds the slug.
    pub source: String,
}

impl SlugFieldSettings {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// `None` when `source` is missing or not a string.
    pub fn from_settings(settings: &FieldSettings) -> Option<Self> {
        match settings.get(SOURCE_SETTING) {
            Some(Value::String(source)) => Some(Self::new(source.clone())),
            _ => None,
        }
    }
}
