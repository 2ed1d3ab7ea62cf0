// src/application/commands/kebabs/make.rs
use super::KebabCommandService;
use crate::{
    application::{
        dto::{KebabDto, KebabRequest},
        error::{ApplicationError, ApplicationResult},
    },
    domain::kebab::{Kebab, KebabInput, KebabSlug},
};
use bytes::Bytes;

pub struct MakeKebabCommand {
    pub body: Bytes,
}

impl MakeKebabCommand {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into() }
    }
}

impl KebabCommandService {
    /// Validate a raw request body, convert its input and record the result.
    ///
    /// Stages run in order and the first failure wins: body size, JSON
    /// decoding, input length, normalization, storage.
    pub async fn make_kebab(&self, command: MakeKebabCommand) -> ApplicationResult<KebabDto> {
        tracing::info!(bytes = command.body.len(), "processing kebab request");

        if command.body.len() > self.body_limit {
            tracing::warn!(
                bytes = command.body.len(),
                limit = self.body_limit,
                "request body over the limit"
            );
            return Err(ApplicationError::PayloadTooLarge {
                limit: self.body_limit,
            });
        }

        let raw_input = decode_input(&command.body)?;
        let input = KebabInput::new(raw_input).inspect_err(|err| {
            tracing::warn!(error = %err, "kebab input rejected");
        })?;

        let normalized = self.normalizer.normalize(input.as_str());
        tracing::debug!(input = %input, result = %normalized, "made kebab");
        if normalized.is_empty() {
            tracing::warn!("no words left after cleaning");
        }

        let result = KebabSlug::new(normalized).map_err(|err| {
            ApplicationError::infrastructure(format!("normalizer broke the slug format: {err}"))
        })?;

        let kebab = Kebab::new(input, result);
        self.store.store(&kebab).await?;
        tracing::debug!("kebab persisted");

        Ok(kebab.into())
    }
}

fn decode_input(body: &[u8]) -> ApplicationResult<String> {
    let request = KebabRequest::from_slice(body).map_err(|err| {
        tracing::warn!(error = %err, "request body is not a kebab request");
        ApplicationError::InvalidPayload
    })?;

    match request.input {
        Some(input) if !input.trim().is_empty() => Ok(input),
        _ => {
            tracing::warn!("kebab request has no input");
            Err(ApplicationError::InvalidPayload)
        }
    }
}
