// src/domain/slug/services.rs
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::content::{
    ContentId, ContentReadRepository, ContentTypeId, JsonFieldQuery, JsonPath, SLUG_DATA_KEY,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{SLUG_STILL_EXISTS, Violation};

/// How far slug uniqueness reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UniquenessScope {
    /// One slug per content type, whatever the record locale.
    #[default]
    ContentType,
    /// One slug per content type and locale.
    ContentTypeAndLocale,
}

impl UniquenessScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContentType => "content_type",
            Self::ContentTypeAndLocale => "locale",
        }
    }
}

impl FromStr for UniquenessScope {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "content_type" | "content-type" => Ok(Self::ContentType),
            "locale" | "content_type_and_locale" => Ok(Self::ContentTypeAndLocale),
            other => Err(DomainError::Validation(format!(
                "unknown slug uniqueness scope: {other}"
            ))),
        }
    }
}

/// One uniqueness probe for a freshly computed slug.
#[derive(Debug, Clone, Copy)]
pub struct SlugCheck<'a> {
    pub candidate: &'a str,
    pub content_type_id: ContentTypeId,
    /// Record being edited; excluded so an update never conflicts with itself.
    pub exclude_id: Option<ContentId>,
    pub locale: Option<&'a str>,
    /// Identifier of the source field; the violation is reported there.
    pub source: &'a str,
}

/// Domain service checking that a slug is not taken within its content type.
pub struct SlugUniquenessService {
    read_repo: Arc<dyn ContentReadRepository>,
    scope: UniquenessScope,
}

impl SlugUniquenessService {
    pub fn new(read_repo: Arc<dyn ContentReadRepository>, scope: UniquenessScope) -> Self {
        Self { read_repo, scope }
    }

    pub async fn check_slug_exists(&self, check: SlugCheck<'_>) -> DomainResult<Option<Violation>> {
        let mut query = JsonFieldQuery::new(
            check.content_type_id,
            JsonPath::key(SLUG_DATA_KEY),
            check.candidate,
        )
        .excluding(check.exclude_id)
        .limit(1);

        if self.scope == UniquenessScope::ContentTypeAndLocale {
            query = query.in_locale(check.locale.map(str::to_string));
        }

        let existing = self.read_repo.find_by_json_path(&query).await?;
        let Some(conflicting) = existing.first() else {
            return Ok(None);
        };

        tracing::debug!(
            slug = check.candidate,
            content_type_id = %check.content_type_id,
            conflicting_id = %conflicting.id,
            "slug already taken"
        );

        Ok(Some(
            Violation::conflict(SLUG_STILL_EXISTS, check.source)
                .with_parameter("%source%", check.source)
                .with_parameter("%value%", check.candidate),
        ))
    }
}
