// src/domain/content/entity.rs
use crate::domain::content::value_objects::{ContentId, ContentTypeId};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

pub type ContentData = Map<String, Value>;

/// Key under which the slug field stores its value inside a record's data.
pub const SLUG_DATA_KEY: &str = "slug";

/// Blank locales are stored as no locale, so `NULL` and `""` never diverge.
pub fn normalize_locale(locale: Option<String>) -> Option<String> {
    locale
        .map(|locale| locale.trim().to_string())
        .filter(|locale| !locale.is_empty())
}

#[derive(Debug, Clone)]
pub struct ContentRecord {
    pub id: ContentId,
    pub content_type_id: ContentTypeId,
    pub locale: Option<String>,
    pub data: ContentData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord {
    pub fn slug(&self) -> Option<&str> {
        self.data.get(SLUG_DATA_KEY).and_then(Value::as_str)
    }

    pub fn set_data(&mut self, data: ContentData, now: DateTime<Utc>) {
        self.data = data;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewContent {
    pub content_type_id: ContentTypeId,
    pub locale: Option<String>,
    pub data: ContentData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub id: ContentId,
    pub data: ContentData,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentUpdate {
    pub fn new(id: ContentId, data: ContentData, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            data,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> ContentRecord {
        let data = json!({ "title": "Hello", "slug": "hello" });
        ContentRecord {
            id: ContentId::new(1).unwrap(),
            content_type_id: ContentTypeId::new(1).unwrap(),
            locale: None,
            data: data.as_object().cloned().unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn blank_locales_normalize_to_none() {
        assert_eq!(normalize_locale(None), None);
        assert_eq!(normalize_locale(Some(String::new())), None);
        assert_eq!(normalize_locale(Some("  ".into())), None);
        assert_eq!(normalize_locale(Some(" de ".into())), Some("de".to_string()));
    }

    #[test]
    fn slug_reads_data_key() {
        assert_eq!(sample_record().slug(), Some("hello"));
    }

    #[test]
    fn set_data_touches_updated_at() {
        let mut record = sample_record();
        let later = record.updated_at + chrono::Duration::seconds(5);
        let data = json!({ "title": "Other" }).as_object().cloned().unwrap();
        record.set_data(data, later);
        assert_eq!(record.updated_at, later);
        assert_eq!(record.slug(), None);
    }
}
