// src/application/commands/content/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::{
            ContentData, ContentId, ContentReadRepository, ContentTypeId, ContentWriteRepository,
        },
        content_type::{ContentType, ContentTypeRepository},
        field::FieldTypeRegistry,
        validation::ValidationContext,
    },
};

pub struct ContentCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) content_type_repo: Arc<dyn ContentTypeRepository>,
    pub(super) registry: Arc<FieldTypeRegistry>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentCommandService {
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        content_type_repo: Arc<dyn ContentTypeRepository>,
        registry: Arc<FieldTypeRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            content_type_repo,
            registry,
            clock,
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

    /// Full-record validation. Any violation blocks the save.
    pub(super) async fn ensure_valid(
        &self,
        content_type: &ContentType,
        data: &ContentData,
        object_id: Option<ContentId>,
        locale: Option<&str>,
    ) -> ApplicationResult<()> {
        let mut ctx = ValidationContext::new(data, object_id).with_locale(locale);
        self.registry
            .validate_data(&content_type.fields, content_type.id, &mut ctx)
            .await?;

        let violations = ctx.into_violations();
        if violations.is_empty() {
            return Ok(());
        }

        tracing::warn!(
            content_type = %content_type.identifier,
            %violations,
            "content save rejected"
        );
        Err(ApplicationError::rejected(violations))
    }
}
