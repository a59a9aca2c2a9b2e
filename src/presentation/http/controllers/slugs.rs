// src/presentation/http/controllers/slugs.rs
use crate::application::dto::SlugDto;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlugPreviewRequest {
    /// Source text; `null` or missing counts as empty.
    #[serde(default)]
    pub text: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/slugs",
    request_body = SlugPreviewRequest,
    responses(
        (status = 200, description = "Slug derived from the given text.", body = SlugDto)
    ),
    tag = "Slugs"
)]
pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SlugPreviewRequest>,
) -> Json<SlugDto> {
    Json(state.services.preview_slug(payload.text.as_deref()))
}
