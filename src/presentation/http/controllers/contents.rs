// src/presentation/http/controllers/contents.rs
use crate::application::{
    commands::content::{CreateContentCommand, UpdateContentCommand},
    dto::ContentDto,
    queries::content::{GetContentBySlugQuery, GetContentQuery},
};
use crate::domain::content::ContentData;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContentRequest {
    #[serde(default)]
    pub locale: Option<String>,
    #[schema(value_type = Object)]
    pub data: ContentData,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContentRequest {
    #[schema(value_type = Object)]
    pub data: ContentData,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugLookupParams {
    #[serde(default)]
    pub locale: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/content-types/{id}/contents",
    params(("id" = i64, Path, description = "Content type id")),
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Content created with a computed slug.", body = ContentDto),
        (status = 404, description = "Unknown content type.", body = ErrorResponse),
        (status = 409, description = "Slug taken by a concurrent writer.", body = ErrorResponse),
        (status = 422, description = "Slug already exists.", body = ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn create_content(
    Extension(state): Extension<HttpState>,
    Path(content_type_id): Path<i64>,
    Json(payload): Json<CreateContentRequest>,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    let command = CreateContentCommand {
        content_type_id,
        locale: payload.locale,
        data: payload.data,
    };

    state
        .services
        .content_commands
        .create_content(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/content-types/{id}/contents/{content_id}",
    params(
        ("id" = i64, Path, description = "Content type id"),
        ("content_id" = i64, Path, description = "Content id")
    ),
    request_body = UpdateContentRequest,
    responses(
        (status = 200, description = "Content updated; slug recomputed.", body = ContentDto),
        (status = 404, description = "Unknown content.", body = ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = ErrorResponse),
        (status = 422, description = "Slug already exists.", body = ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn update_content(
    Extension(state): Extension<HttpState>,
    Path((content_type_id, id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateContentRequest>,
) -> HttpResult<Json<ContentDto>> {
    let command = UpdateContentCommand {
        content_type_id,
        id,
        data: payload.data,
    };

    state
        .services
        .content_commands
        .update_content(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/content-types/{id}/contents/{content_id}",
    params(
        ("id" = i64, Path, description = "Content type id"),
        ("content_id" = i64, Path, description = "Content id")
    ),
    responses(
        (status = 200, description = "Content.", body = ContentDto),
        (status = 404, description = "Unknown content.", body = ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn get_content(
    Extension(state): Extension<HttpState>,
    Path((content_type_id, id)): Path<(i64, i64)>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_queries
        .get_content(GetContentQuery {
            content_type_id,
            id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/content-types/{id}/contents/by-slug/{slug}",
    params(
        ("id" = i64, Path, description = "Content type id"),
        ("slug" = String, Path, description = "Stored slug"),
        SlugLookupParams
    ),
    responses(
        (status = 200, description = "Content.", body = ContentDto),
        (status = 404, description = "No content with this slug.", body = ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn get_content_by_slug(
    Extension(state): Extension<HttpState>,
    Path((content_type_id, slug)): Path<(i64, String)>,
    Query(params): Query<SlugLookupParams>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_queries
        .get_content_by_slug(GetContentBySlugQuery {
            content_type_id,
            slug,
            locale: params.locale,
        })
        .await
        .into_http()
        .map(Json)
}
