// src/application/commands/content_types/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{content_type::ContentTypeRepository, field::FieldTypeRegistry},
};

pub struct ContentTypeCommandService {
    pub(super) repo: Arc<dyn ContentTypeRepository>,
    pub(super) registry: Arc<FieldTypeRegistry>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentTypeCommandService {
    pub fn new(
        repo: Arc<dyn ContentTypeRepository>,
        registry: Arc<FieldTypeRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            registry,
            clock,
        }
    }
}
