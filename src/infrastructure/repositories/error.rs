use crate::domain::errors::DomainError;
use crate::infrastructure::database::{SLUG_INDEX_CONTENT_TYPE, SLUG_INDEX_LOCALE};

const CNT_CONTENT_TYPE_IDENTIFIER: &str = "content_types_identifier_key";
const CNT_CONTENT_TYPE_FK: &str = "contents_content_type_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    SLUG_INDEX_CONTENT_TYPE | SLUG_INDEX_LOCALE => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_CONTENT_TYPE_IDENTIFIER => {
                        DomainError::Conflict("content type identifier already exists".into())
                    }
                    CNT_CONTENT_TYPE_FK => DomainError::NotFound("content type not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
