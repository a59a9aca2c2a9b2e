// src/domain/content_type/repository.rs
use crate::domain::content::ContentTypeId;
use crate::domain::content_type::entity::{ContentType, NewContentType};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContentTypeRepository: Send + Sync {
    async fn insert(&self, content_type: NewContentType) -> DomainResult<ContentType>;
    async fn find_by_id(&self, id: ContentTypeId) -> DomainResult<Option<ContentType>>;
}
