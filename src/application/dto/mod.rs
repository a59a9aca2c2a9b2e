pub mod content;
pub mod content_types;
pub mod slugs;
pub mod violations;

pub use content::ContentDto;
pub use content_types::{ContentTypeDto, FieldDto};
pub use slugs::{SlugDto, SlugFieldInput};
pub use violations::{ViolationDto, violation_dtos};
