// src/domain/content/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub i64);

impl ContentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("content id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContentId> for i64 {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentTypeId(pub i64);

impl ContentTypeId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "content type id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContentTypeId> for i64 {
    fn from(value: ContentTypeId) -> Self {
        value.0
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored slug. Only ever built from slugifier output or from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DomainError::Validation(format!(
                "slug contains disallowed characters: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// JSON-path style key into a record's data, e.g. `$.slug` or `$.meta.slug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<String>,
}

impl JsonPath {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let rest = raw
            .strip_prefix("$.")
            .ok_or_else(|| DomainError::Validation(format!("json path must start with `$.`: {raw}")))?;

        let segments: Vec<String> = rest.split('.').map(str::to_string).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(DomainError::Validation(format!(
                "json path contains an empty key: {raw}"
            )));
        }

        Ok(Self { segments })
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self {
            segments: vec![key.into()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolves the path against a data mapping.
    pub fn lookup<'a>(
        &self,
        data: &'a serde_json::Map<String, serde_json::Value>,
    ) -> Option<&'a serde_json::Value> {
        let (first, rest) = self.segments.split_first()?;
        let mut current = data.get(first)?;
        for segment in rest {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$.{}", self.segments.join("."))
    }
}
