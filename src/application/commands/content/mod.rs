// src/application/commands/content/mod.rs
mod create;
mod service;
mod update;

pub use create::{CreateContentCommand, CreateContentCommandBuilder};
pub use service::ContentCommandService;
pub use update::UpdateContentCommand;
