// src/presentation/http/controllers/content_types.rs
use crate::application::{
    commands::content_types::CreateContentTypeCommand,
    dto::{ContentTypeDto, FieldDto},
    queries::content_types::GetContentTypeQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContentTypeRequest {
    pub identifier: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDto>,
}

#[utoipa::path(
    post,
    path = "/api/v1/content-types",
    request_body = CreateContentTypeRequest,
    responses(
        (status = 201, description = "Content type created.", body = ContentTypeDto),
        (status = 400, description = "Malformed content type.", body = ErrorResponse),
        (status = 422, description = "Field settings rejected.", body = ErrorResponse)
    ),
    tag = "Content types"
)]
pub async fn create_content_type(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateContentTypeRequest>,
) -> HttpResult<(StatusCode, Json<ContentTypeDto>)> {
    let title = payload
        .title
        .unwrap_or_else(|| payload.identifier.clone());
    let command = CreateContentTypeCommand {
        identifier: payload.identifier,
        title,
        fields: payload.fields.into_iter().map(Into::into).collect(),
    };

    state
        .services
        .content_type_commands
        .create_content_type(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/content-types/{id}",
    params(("id" = i64, Path, description = "Content type id")),
    responses(
        (status = 200, description = "Content type.", body = ContentTypeDto),
        (status = 404, description = "Unknown content type.", body = ErrorResponse)
    ),
    tag = "Content types"
)]
pub async fn get_content_type(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentTypeDto>> {
    state
        .services
        .content_type_queries
        .get_content_type(GetContentTypeQuery { id })
        .await
        .into_http()
        .map(Json)
}
