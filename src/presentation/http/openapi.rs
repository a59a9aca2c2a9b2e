// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::slugs::preview_slug,
        crate::presentation::http::controllers::content_types::create_content_type,
        crate::presentation::http::controllers::content_types::get_content_type,
        crate::presentation::http::controllers::contents::create_content,
        crate::presentation::http::controllers::contents::update_content,
        crate::presentation::http::controllers::contents::get_content,
        crate::presentation::http::controllers::contents::get_content_by_slug,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::slugs::SlugPreviewRequest,
            crate::presentation::http::controllers::content_types::CreateContentTypeRequest,
            crate::presentation::http::controllers::contents::CreateContentRequest,
            crate::presentation::http::controllers::contents::UpdateContentRequest,
            crate::application::dto::SlugDto,
            crate::application::dto::SlugFieldInput,
            crate::application::dto::ContentDto,
            crate::application::dto::ContentTypeDto,
            crate::application::dto::FieldDto,
            crate::application::dto::ViolationDto
        )
    ),
    tags(
        (name = "Slugs", description = "Slug generation"),
        (name = "Content types", description = "Content type schemas"),
        (name = "Contents", description = "Content records with slug fields"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Slug Field API",
        description = "Content records with auto-generated, unique slugs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
