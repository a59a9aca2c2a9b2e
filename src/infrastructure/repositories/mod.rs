// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_content;
mod postgres_content_type;

pub use error::map_sqlx;
pub use postgres_content::{PostgresContentReadRepository, PostgresContentWriteRepository};
pub use postgres_content_type::PostgresContentTypeRepository;
