// src/application/commands/content/create.rs
use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::content::{ContentData, ContentTypeId, NewContent, normalize_locale},
};

pub struct CreateContentCommand {
    pub content_type_id: i64,
    pub locale: Option<String>,
    pub data: ContentData,
}

impl CreateContentCommand {
    pub fn builder() -> CreateContentCommandBuilder {
        CreateContentCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateContentCommandBuilder {
    content_type_id: Option<i64>,
    locale: Option<String>,
    data: ContentData,
}

impl CreateContentCommandBuilder {
    pub fn content_type_id(mut self, id: i64) -> Self {
        self.content_type_id = Some(id);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn data(mut self, data: ContentData) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> Result<CreateContentCommand, &'static str> {
        Ok(CreateContentCommand {
            content_type_id: self.content_type_id.ok_or("content type id is required")?,
            locale: self.locale,
            data: self.data,
        })
    }
}

impl ContentCommandService {
    pub async fn create_content(&self, command: CreateContentCommand) -> ApplicationResult<ContentDto> {
        let content_type_id = ContentTypeId::new(command.content_type_id)?;
        let content_type = self.load_content_type(content_type_id).await?;

        let CreateContentCommand { locale, mut data, .. } = command;
        let locale = normalize_locale(locale);
        self.registry.on_create(&content_type.fields, &mut data);
        self.ensure_valid(&content_type, &data, None, locale.as_deref())
            .await?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewContent {
                content_type_id,
                locale,
                data,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            content_type = %content_type.identifier,
            id = %created.id,
            slug = created.slug().unwrap_or_default(),
            "content created"
        );
        Ok(ContentDto::present(&self.registry, &content_type.fields, created))
    }
}
