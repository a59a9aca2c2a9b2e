use super::ContentQueryService;
use crate::application::{
    dto::ContentDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::content::{ContentId, ContentTypeId};

pub struct GetContentQuery {
    pub content_type_id: i64,
    pub id: i64,
}

impl ContentQueryService {
    pub async fn get_content(&self, query: GetContentQuery) -> ApplicationResult<ContentDto> {
        let content_type_id = ContentTypeId::new(query.content_type_id)?;
        let id = ContentId::new(query.id)?;
        let content_type = self.load_content_type(content_type_id).await?;

        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|record| record.content_type_id == content_type_id)
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        Ok(ContentDto::present(&self.registry, &content_type.fields, record))
    }
}
