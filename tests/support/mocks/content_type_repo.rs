// tests/support/mocks/content_type_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use slug_field::domain::content::ContentTypeId;
use slug_field::domain::content_type::{ContentType, ContentTypeRepository, NewContentType};
use slug_field::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
pub struct InMemoryContentTypeRepo {
    types: Mutex<Vec<ContentType>>,
}

impl InMemoryContentTypeRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentTypeRepository for InMemoryContentTypeRepo {
    async fn insert(&self, content_type: NewContentType) -> DomainResult<ContentType> {
        let mut types = self.types.lock().unwrap();
        if types
            .iter()
            .any(|existing| existing.identifier == content_type.identifier)
        {
            return Err(DomainError::Conflict(
                "content type identifier already exists".into(),
            ));
        }
        let created = ContentType {
            id: ContentTypeId::new(types.len() as i64 + 1)?,
            identifier: content_type.identifier,
            title: content_type.title,
            fields: content_type.fields,
            created_at: content_type.created_at,
        };
        types.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: ContentTypeId) -> DomainResult<Option<ContentType>> {
        Ok(self
            .types
            .lock()
            .unwrap()
            .iter()
            .find(|content_type| content_type.id == id)
            .cloned())
    }
}
