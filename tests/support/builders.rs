// tests/support/builders.rs
use serde_json::Value;
use slug_field::application::commands::content_types::CreateContentTypeCommand;
use slug_field::domain::content::{ContentData, ContentId, ContentRecord, ContentTypeId};
use slug_field::domain::content_type::FieldableField;
use slug_field::domain::field::SLUG_FIELD_TYPE;

use super::helpers::TestContext;
use super::mocks::fixed_now;

pub struct ContentTypeBuilder {
    identifier: String,
    fields: Vec<FieldableField>,
}

impl ContentTypeBuilder {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            fields: Vec::new(),
        }
    }

    /// `title` テキストフィールドと、それをソースにする `url` スラグフィールド
    pub fn blog_post() -> Self {
        Self::new("blog_post")
            .text_field("title")
            .slug_field("url", "title")
    }

    pub fn text_field(mut self, identifier: &str) -> Self {
        self.fields.push(FieldableField::new(identifier, "text"));
        self
    }

    pub fn slug_field(mut self, identifier: &str, source: &str) -> Self {
        self.fields
            .push(FieldableField::new(identifier, SLUG_FIELD_TYPE).with_setting("source", source));
        self
    }

    pub fn field(mut self, field: FieldableField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> CreateContentTypeCommand {
        CreateContentTypeCommand {
            title: self.identifier.clone(),
            identifier: self.identifier,
            fields: self.fields,
        }
    }
}

/// ブログ記事タイプを作成し、その ID を返す
pub async fn create_blog_post_type(ctx: &TestContext) -> i64 {
    ctx.services
        .content_type_commands
        .create_content_type(ContentTypeBuilder::blog_post().build())
        .await
        .expect("create content type")
        .id
}

pub struct RecordBuilder {
    id: i64,
    content_type_id: i64,
    locale: Option<String>,
    data: ContentData,
}

impl RecordBuilder {
    pub fn new(id: i64, content_type_id: i64) -> Self {
        Self {
            id,
            content_type_id,
            locale: None,
            data: ContentData::new(),
        }
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> ContentRecord {
        ContentRecord {
            id: ContentId::new(self.id).unwrap(),
            content_type_id: ContentTypeId::new(self.content_type_id).unwrap(),
            locale: self.locale,
            data: self.data,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
