// src/infrastructure/database.rs
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::domain::slug::UniquenessScope;

pub const SLUG_INDEX_CONTENT_TYPE: &str = "contents_slug_per_content_type_key";
pub const SLUG_INDEX_LOCALE: &str = "contents_slug_per_locale_key";

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Storage-level guard against concurrent writers racing past the slug
/// validator. Swaps the partial unique index to match the configured scope.
pub async fn ensure_slug_index(pool: &PgPool, scope: UniquenessScope) -> Result<(), sqlx::Error> {
    let (keep, drop, columns) = match scope {
        UniquenessScope::ContentType => (
            SLUG_INDEX_CONTENT_TYPE,
            SLUG_INDEX_LOCALE,
            "content_type_id, (data->>'slug')",
        ),
        UniquenessScope::ContentTypeAndLocale => (
            SLUG_INDEX_LOCALE,
            SLUG_INDEX_CONTENT_TYPE,
            "content_type_id, COALESCE(locale, ''), (data->>'slug')",
        ),
    };

    let mut tx = pool.begin().await?;
    sqlx::query(&format!("DROP INDEX IF EXISTS {drop}"))
        .execute(&mut *tx)
        .await?;
    sqlx::query(&format!(
        "CREATE UNIQUE INDEX IF NOT EXISTS {keep} ON contents ({columns}) WHERE data ? 'slug'"
    ))
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    tracing::info!(index = keep, scope = scope.as_str(), "slug unique index ensured");
    Ok(())
}
