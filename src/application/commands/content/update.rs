// src/application/commands/content/update.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{ContentData, ContentId, ContentTypeId, ContentUpdate},
};

pub struct UpdateContentCommand {
    pub content_type_id: i64,
    pub id: i64,
    pub data: ContentData,
}

impl ContentCommandService {
    /// Replaces the record's data. The slug is recomputed from the current
    /// source value on every update.
    pub async fn update_content(&self, command: UpdateContentCommand) -> ApplicationResult<ContentDto> {
        let content_type_id = ContentTypeId::new(command.content_type_id)?;
        let id = ContentId::new(command.id)?;
        let content_type = self.load_content_type(content_type_id).await?;

        let mut record = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|record| record.content_type_id == content_type_id)
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        let UpdateContentCommand { mut data, .. } = command;
        self.registry
            .on_update(&content_type.fields, &record.data, &mut data);
        self.ensure_valid(&content_type, &data, Some(record.id), record.locale.as_deref())
            .await?;

        let original_updated_at = record.updated_at;
        record.set_data(data, self.clock.now());
        let mut update = ContentUpdate::new(id, record.data, original_updated_at);
        update.set_updated_at(record.updated_at);

        let updated = self.write_repo.update(update).await?;

        tracing::info!(
            content_type = %content_type.identifier,
            id = %updated.id,
            slug = updated.slug().unwrap_or_default(),
            "content updated"
        );
        Ok(ContentDto::present(&self.registry, &content_type.fields, updated))
    }
}
