// src/domain/content/repository.rs
use crate::domain::content::entity::{ContentRecord, ContentUpdate, NewContent};
use crate::domain::content::value_objects::{ContentId, ContentTypeId, JsonPath};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use serde_json::Value;

/// Lookup of records whose data at `path` equals `value`.
#[derive(Debug, Clone)]
pub struct JsonFieldQuery {
    pub content_type_id: ContentTypeId,
    pub path: JsonPath,
    pub value: Value,
    pub exclude_id: Option<ContentId>,
    /// `Some(..)` restricts matches to records with this exact locale, where
    /// `Some(None)` means records stored without a locale.
    pub locale: Option<Option<String>>,
    pub limit: u32,
}

impl JsonFieldQuery {
    pub fn new(content_type_id: ContentTypeId, path: JsonPath, value: impl Into<Value>) -> Self {
        Self {
            content_type_id,
            path,
            value: value.into(),
            exclude_id: None,
            locale: None,
            limit: 1,
        }
    }

    pub fn excluding(mut self, id: Option<ContentId>) -> Self {
        self.exclude_id = id;
        self
    }

    pub fn in_locale(mut self, locale: Option<String>) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Whether `record` satisfies every predicate of this query.
    pub fn matches(&self, record: &ContentRecord) -> bool {
        record.content_type_id == self.content_type_id
            && self.exclude_id != Some(record.id)
            && self
                .locale
                .as_ref()
                .is_none_or(|locale| *locale == record.locale)
            && self.path.lookup(&record.data) == Some(&self.value)
    }
}

#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    async fn insert(&self, content: NewContent) -> DomainResult<ContentRecord>;
    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentRecord>;
}

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentRecord>>;
    async fn find_by_json_path(&self, query: &JsonFieldQuery) -> DomainResult<Vec<ContentRecord>>;
}
