pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    ContentData, ContentRecord, ContentUpdate, NewContent, SLUG_DATA_KEY, normalize_locale,
};
pub use repository::{ContentReadRepository, ContentWriteRepository, JsonFieldQuery};
pub use value_objects::{ContentId, ContentTypeId, JsonPath, Slug};
