use super::ContentTypeQueryService;
use crate::application::{
    dto::ContentTypeDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::content::ContentTypeId;

pub struct GetContentTypeQuery {
    pub id: i64,
}

impl ContentTypeQueryService {
    pub async fn get_content_type(
        &self,
        query: GetContentTypeQuery,
    ) -> ApplicationResult<ContentTypeDto> {
        let id = ContentTypeId::new(query.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("content type not found"))
    }
}
