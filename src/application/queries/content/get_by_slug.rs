use super::ContentQueryService;
use crate::application::{
    dto::ContentDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::content::{
    ContentTypeId, JsonFieldQuery, JsonPath, SLUG_DATA_KEY, Slug, normalize_locale,
};

pub struct GetContentBySlugQuery {
    pub content_type_id: i64,
    pub slug: String,
    pub locale: Option<String>,
}

impl ContentQueryService {
    pub async fn get_content_by_slug(
        &self,
        query: GetContentBySlugQuery,
    ) -> ApplicationResult<ContentDto> {
        let content_type_id = ContentTypeId::new(query.content_type_id)?;
        let slug = Slug::new(query.slug)?;
        let content_type = self.load_content_type(content_type_id).await?;

        let mut lookup =
            JsonFieldQuery::new(content_type_id, JsonPath::key(SLUG_DATA_KEY), slug.into_inner());
        if let Some(locale) = query.locale {
            lookup = lookup.in_locale(normalize_locale(Some(locale)));
        }

        let record = self
            .read_repo
            .find_by_json_path(&lookup)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        Ok(ContentDto::present(&self.registry, &content_type.fields, record))
    }
}
