use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::content::{ContentReadRepository, ContentTypeId};
use crate::domain::content_type::{ContentType, ContentTypeRepository};
use crate::domain::field::FieldTypeRegistry;

pub struct ContentQueryService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) content_type_repo: Arc<dyn ContentTypeRepository>,
    pub(super) registry: Arc<FieldTypeRegistry>,
}

impl ContentQueryService {
    pub fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        content_type_repo: Arc<dyn ContentTypeRepository>,
        registry: Arc<FieldTypeRegistry>,
    ) -> Self {
        Self {
            read_repo,
            content_type_repo,
            registry,
        }
    }

    pub(super) async fn load_content_type(
        &self,
        id: ContentTypeId,
    ) -> ApplicationResult<ContentType> {
        self.content_type_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content type not found"))
    }
}
