// src/application/error.rs
use crate::domain::errors::DomainError;
use crate::domain::validation::Violations;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// The save was blocked by one or more violations.
    #[error("rejected: {0}")]
    Rejected(Violations),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn rejected(violations: impl Into<Violations>) -> Self {
        Self::Rejected(violations.into())
    }

    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Rejected(violations) => Some(violations),
            _ => None,
        }
    }
}
