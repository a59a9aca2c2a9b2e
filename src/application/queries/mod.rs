pub mod content;
pub mod content_types;
