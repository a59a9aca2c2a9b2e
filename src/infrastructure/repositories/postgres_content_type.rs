// src/infrastructure/repositories/postgres_content_type.rs
use super::map_sqlx;
use crate::domain::content::ContentTypeId;
use crate::domain::content_type::{
    ContentType, ContentTypeRepository, FieldableField, NewContentType,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresContentTypeRepository {
    pool: PgPool,
}

impl PostgresContentTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentTypeRow {
    id: i64,
    identifier: String,
    title: String,
    fields: Json<Vec<FieldableField>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContentTypeRow> for ContentType {
    type Error = DomainError;

    fn try_from(row: ContentTypeRow) -> Result<Self, Self::Error> {
        Ok(ContentType {
            id: ContentTypeId::new(row.id)?,
            identifier: row.identifier,
            title: row.title,
            fields: row.fields.0,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ContentTypeRepository for PostgresContentTypeRepository {
    async fn insert(&self, content_type: NewContentType) -> DomainResult<ContentType> {
        let NewContentType {
            identifier,
            title,
            fields,
            created_at,
        } = content_type;

        let row = sqlx::query_as::<_, ContentTypeRow>(
            "INSERT INTO content_types (identifier, title, fields, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, identifier, title, fields, created_at",
        )
        .bind(identifier)
        .bind(title)
        .bind(Json(fields))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContentType::try_from(row)
    }

    async fn find_by_id(&self, id: ContentTypeId) -> DomainResult<Option<ContentType>> {
        let row = sqlx::query_as::<_, ContentTypeRow>(
            "SELECT id, identifier, title, fields, created_at FROM content_types WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContentType::try_from).transpose()
    }
}
