pub mod field_type;
pub mod registry;
pub mod settings;
pub mod slug_field;

pub use field_type::FieldType;
pub use registry::FieldTypeRegistry;
pub use settings::SlugFieldSettings;
pub use slug_field::{SLUG_FIELD_INPUT, SLUG_FIELD_TYPE, SlugFieldType};
