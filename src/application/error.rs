// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("request body over the limit of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("invalid JSON or empty input")]
    InvalidPayload,

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// True for failures caused by the caller's request rather than by the
    /// service or its collaborators.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::PayloadTooLarge { .. } | Self::InvalidPayload => true,
            Self::Domain(DomainError::Validation(_)) => true,
            Self::Domain(DomainError::Persistence(_)) | Self::Infrastructure(_) => false,
        }
    }
}
