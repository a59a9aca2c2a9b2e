use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input shape accepted by slug fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SlugFieldInput {
    /// The Slug for a Content Type
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugDto {
    pub slug: String,
}
