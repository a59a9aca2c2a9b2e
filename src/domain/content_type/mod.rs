pub mod entity;
pub mod repository;

pub use entity::{ContentType, FieldSettings, FieldableField, NewContentType};
pub use repository::ContentTypeRepository;
