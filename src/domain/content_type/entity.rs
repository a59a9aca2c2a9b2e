// src/domain/content_type/entity.rs
use crate::domain::content::ContentTypeId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Raw settings object as saved by the content-type administrator.
pub type FieldSettings = Map<String, Value>;

/// A single named, typed attribute definition of a content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldableField {
    pub identifier: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub settings: FieldSettings,
}

impl FieldableField {
    pub fn new(identifier: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            field_type: field_type.into(),
            settings: FieldSettings::new(),
        }
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct ContentType {
    pub id: ContentTypeId,
    pub identifier: String,
    pub title: String,
    pub fields: Vec<FieldableField>,
    pub created_at: DateTime<Utc>,
}

impl ContentType {
    pub fn field(&self, identifier: &str) -> Option<&FieldableField> {
        self.fields.iter().find(|field| field.identifier == identifier)
    }

    pub fn field_identifiers(&self) -> BTreeSet<String> {
        field_identifiers(&self.fields)
    }
}

#[derive(Debug, Clone)]
pub struct NewContentType {
    pub identifier: String,
    pub title: String,
    pub fields: Vec<FieldableField>,
    pub created_at: DateTime<Utc>,
}

impl NewContentType {
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        fields: Vec<FieldableField>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let identifier = identifier.into();
        if identifier.trim().is_empty() {
            return Err(DomainError::Validation(
                "content type identifier cannot be empty".into(),
            ));
        }

        let mut seen = BTreeSet::new();
        for field in &fields {
            if field.identifier.trim().is_empty() {
                return Err(DomainError::Validation(
                    "field identifier cannot be empty".into(),
                ));
            }
            if !seen.insert(field.identifier.as_str()) {
                return Err(DomainError::Validation(format!(
                    "duplicate field identifier: {}",
                    field.identifier
                )));
            }
        }

        Ok(Self {
            identifier,
            title: title.into(),
            fields,
            created_at,
        })
    }

    pub fn field_identifiers(&self) -> BTreeSet<String> {
        field_identifiers(&self.fields)
    }
}

fn field_identifiers(fields: &[FieldableField]) -> BTreeSet<String> {
    fields.iter().map(|field| field.identifier.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_duplicate_field_identifiers() {
        let fields = vec![
            FieldableField::new("title", "text"),
            FieldableField::new("title", "text"),
        ];
        assert!(NewContentType::new("post", "Post", fields, Utc::now()).is_err());
    }

    #[test]
    fn collects_field_identifiers() {
        let fields = vec![
            FieldableField::new("title", "text"),
            FieldableField::new("url", "slug").with_setting("source", "title"),
        ];
        let new_type = NewContentType::new("post", "Post", fields, Utc::now()).unwrap();
        let identifiers: Vec<_> = new_type.field_identifiers().into_iter().collect();
        assert_eq!(identifiers, ["title", "url"]);
    }

    #[test]
    fn field_round_trips_through_json_with_type_key() {
        let raw = json!({ "identifier": "url", "type": "slug", "settings": { "source": "title" } });
        let field: FieldableField = serde_json::from_value(raw).unwrap();
        assert_eq!(field.field_type, "slug");
        assert_eq!(field.settings.get("source"), Some(&json!("title")));
    }
}
