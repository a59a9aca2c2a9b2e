use std::sync::Arc;

use crate::domain::content_type::ContentTypeRepository;

pub struct ContentTypeQueryService {
    pub(super) repo: Arc<dyn ContentTypeRepository>,
}

impl ContentTypeQueryService {
    pub fn new(repo: Arc<dyn ContentTypeRepository>) -> Self {
        Self { repo }
    }
}
