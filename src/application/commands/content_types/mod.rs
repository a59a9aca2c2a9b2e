// src/application/commands/content_types/mod.rs
mod create;
mod service;

pub use create::CreateContentTypeCommand;
pub use service::ContentTypeCommandService;
