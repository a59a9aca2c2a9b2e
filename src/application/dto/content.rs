use crate::domain::content::{ContentData, ContentRecord, SLUG_DATA_KEY};
use crate::domain::content_type::FieldableField;
use crate::domain::field::FieldTypeRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDto {
    pub id: i64,
    pub content_type_id: i64,
    #[serde(default)]
    pub locale: Option<String>,
    /// Resolved slug; `null` when the record has none.
    #[serde(default)]
    pub slug: Option<String>,
    #[schema(value_type = Object)]
    pub data: ContentData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentDto {
    /// Resolves `record` through the field types of its content type.
    pub fn present(
        registry: &FieldTypeRegistry,
        fields: &[FieldableField],
        record: ContentRecord,
    ) -> Self {
        let data = registry.resolve(fields, &record.data);
        Self::from_resolved(record, data)
    }

    fn from_resolved(record: ContentRecord, data: ContentData) -> Self {
        let slug = data
            .get(SLUG_DATA_KEY)
            .and_then(|value| value.as_str())
            .map(str::to_string);
        Self {
            id: record.id.into(),
            content_type_id: record.content_type_id.into(),
            locale: record.locale,
            slug,
            data,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
