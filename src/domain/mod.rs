pub mod content;
pub mod content_type;
pub mod errors;
pub mod field;
pub mod slug;
pub mod validation;
