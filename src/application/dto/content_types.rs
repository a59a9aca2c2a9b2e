use crate::domain::content_type::{ContentType, FieldableField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldDto {
    pub identifier: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl From<FieldableField> for FieldDto {
    fn from(field: FieldableField) -> Self {
        Self {
            identifier: field.identifier,
            field_type: field.field_type,
            settings: field.settings,
        }
    }
}

impl From<FieldDto> for FieldableField {
    fn from(dto: FieldDto) -> Self {
        Self {
            identifier: dto.identifier,
            field_type: dto.field_type,
            settings: dto.settings,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentTypeDto {
    pub id: i64,
    pub identifier: String,
    pub title: String,
    pub fields: Vec<FieldDto>,
    pub created_at: DateTime<Utc>,
}

impl From<ContentType> for ContentTypeDto {
    fn from(content_type: ContentType) -> Self {
        Self {
            id: content_type.id.into(),
            identifier: content_type.identifier,
            title: content_type.title,
            fields: content_type.fields.into_iter().map(Into::into).collect(),
            created_at: content_type.created_at,
        }
    }
}
