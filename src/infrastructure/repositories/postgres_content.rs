// src/infrastructure/repositories/postgres_content.rs
use super::map_sqlx;
use crate::domain::content::{
    ContentData, ContentId, ContentReadRepository, ContentRecord, ContentTypeId, ContentUpdate,
    ContentWriteRepository, JsonFieldQuery, NewContent,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CONTENT_COLUMNS: &str = "id, content_type_id, locale, data, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContentWriteRepository {
    pool: PgPool,
}

impl PostgresContentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresContentReadRepository {
    pool: PgPool,
}

impl PostgresContentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: i64,
    content_type_id: i64,
    locale: Option<String>,
    data: Json<ContentData>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentRecord {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        Ok(ContentRecord {
            id: ContentId::new(row.id)?,
            content_type_id: ContentTypeId::new(row.content_type_id)?,
            locale: row.locale,
            data: row.data.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentWriteRepository for PostgresContentWriteRepository {
    async fn insert(&self, content: NewContent) -> DomainResult<ContentRecord> {
        let NewContent {
            content_type_id,
            locale,
            data,
            created_at,
            updated_at,
        } = content;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "INSERT INTO contents (content_type_id, locale, data, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {CONTENT_COLUMNS}"
        ))
        .bind(i64::from(content_type_id))
        .bind(locale)
        .bind(Json(data))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContentRecord::try_from(row)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentRecord> {
        let ContentUpdate {
            id,
            data,
            original_updated_at,
            updated_at,
        } = update;

        let maybe_row = sqlx::query_as::<_, ContentRow>(&format!(
            "UPDATE contents SET data = $1, updated_at = $2
             WHERE id = $3 AND updated_at = $4
             RETURNING {CONTENT_COLUMNS}"
        ))
        .bind(Json(data))
        .bind(updated_at)
        .bind(i64::from(id))
        .bind(original_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("content update conflict, please retry".into()))?;

        ContentRecord::try_from(row)
    }
}

impl PostgresContentReadRepository {
    fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, query: &'a JsonFieldQuery) {
        builder.push(" WHERE content_type_id = ");
        builder.push_bind(i64::from(query.content_type_id));

        builder.push(" AND data #> ");
        builder.push_bind(query.path.segments().to_vec());
        builder.push(" = ");
        builder.push_bind(Json(&query.value));

        match &query.locale {
            Some(Some(locale)) => {
                builder.push(" AND locale = ");
                builder.push_bind(locale.as_str());
            }
            Some(None) => {
                builder.push(" AND locale IS NULL");
            }
            None => {}
        }

        if let Some(exclude_id) = query.exclude_id {
            builder.push(" AND id <> ");
            builder.push_bind(i64::from(exclude_id));
        }
    }
}

#[async_trait]
impl ContentReadRepository for PostgresContentReadRepository {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentRecord>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM contents WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContentRecord::try_from).transpose()
    }

    async fn find_by_json_path(&self, query: &JsonFieldQuery) -> DomainResult<Vec<ContentRecord>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {CONTENT_COLUMNS} FROM contents"));
        Self::apply_conditions(&mut builder, query);
        builder.push(" ORDER BY id LIMIT ");
        builder.push_bind(i64::from(query.limit));

        let rows = builder
            .build_query_as::<ContentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ContentRecord::try_from).collect()
    }
}
