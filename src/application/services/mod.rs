// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{content::ContentCommandService, content_types::ContentTypeCommandService},
        dto::SlugDto,
        ports::{time::Clock, util::SlugGenerator},
        queries::{content::ContentQueryService, content_types::ContentTypeQueryService},
    },
    domain::{
        content::{ContentReadRepository, ContentWriteRepository},
        content_type::ContentTypeRepository,
        field::{FieldTypeRegistry, SlugFieldType},
        slug::{SlugUniquenessService, UniquenessScope},
    },
};

pub struct ApplicationServices {
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub content_type_commands: Arc<ContentTypeCommandService>,
    pub content_type_queries: Arc<ContentTypeQueryService>,
    registry: Arc<FieldTypeRegistry>,
    slugger: Arc<dyn SlugGenerator>,
}

impl ApplicationServices {
    pub fn new(
        content_write_repo: Arc<dyn ContentWriteRepository>,
        content_read_repo: Arc<dyn ContentReadRepository>,
        content_type_repo: Arc<dyn ContentTypeRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        scope: UniquenessScope,
    ) -> Self {
        let uniqueness = Arc::new(SlugUniquenessService::new(
            Arc::clone(&content_read_repo),
            scope,
        ));
        let slug_field = Arc::new(SlugFieldType::new(Arc::clone(&slugger), uniqueness));
        let registry = Arc::new(FieldTypeRegistry::new().with(slug_field));

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&content_write_repo),
            Arc::clone(&content_read_repo),
            Arc::clone(&content_type_repo),
            Arc::clone(&registry),
            Arc::clone(&clock),
        ));

        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&content_read_repo),
            Arc::clone(&content_type_repo),
            Arc::clone(&registry),
        ));

        let content_type_commands = Arc::new(ContentTypeCommandService::new(
            Arc::clone(&content_type_repo),
            Arc::clone(&registry),
            Arc::clone(&clock),
        ));
        let content_type_queries =
            Arc::new(ContentTypeQueryService::new(Arc::clone(&content_type_repo)));

        Self {
            content_commands,
            content_queries,
            content_type_commands,
            content_type_queries,
            registry,
            slugger,
        }
    }

    pub fn registry(&self) -> Arc<FieldTypeRegistry> {
        Arc::clone(&self.registry)
    }

    /// Slug the configured generator would derive from `text`. A missing
    /// text counts as empty.
    pub fn preview_slug(&self, text: Option<&str>) -> SlugDto {
        SlugDto {
            slug: self.slugger.slugify(text.unwrap_or_default()),
        }
    }
}
