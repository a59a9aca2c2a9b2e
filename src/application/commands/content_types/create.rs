// src/application/commands/content_types/create.rs
use super::ContentTypeCommandService;
use crate::{
    application::{
        dto::ContentTypeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content_type::{FieldableField, NewContentType},
};

pub struct CreateContentTypeCommand {
    pub identifier: String,
    pub title: String,
    pub fields: Vec<FieldableField>,
}

impl ContentTypeCommandService {
    /// Saves a content type schema. Field settings are validated here, once,
    /// not on every record save.
    pub async fn create_content_type(
        &self,
        command: CreateContentTypeCommand,
    ) -> ApplicationResult<ContentTypeDto> {
        let CreateContentTypeCommand {
            identifier,
            title,
            fields,
        } = command;
        let new_type = NewContentType::new(identifier, title, fields, self.clock.now())?;

        let violations = self
            .registry
            .validate_settings(&new_type.fields, &new_type.field_identifiers());
        if !violations.is_empty() {
            tracing::warn!(
                content_type = %new_type.identifier,
                %violations,
                "content type settings rejected"
            );
            return Err(ApplicationError::rejected(violations));
        }

        let created = self.repo.insert(new_type).await?;
        tracing::info!(content_type = %created.identifier, id = %created.id, "content type created");
        Ok(created.into())
    }
}
