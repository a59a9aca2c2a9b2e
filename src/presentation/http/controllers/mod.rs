// src/presentation/http/controllers/mod.rs
pub mod content_types;
pub mod contents;
pub mod slugs;
