mod get_by_id;
mod service;

pub use get_by_id::GetContentTypeQuery;
pub use service::ContentTypeQueryService;
