mod get_by_id;
mod get_by_slug;
mod service;

pub use get_by_id::GetContentQuery;
pub use get_by_slug::GetContentBySlugQuery;
pub use service::ContentQueryService;
