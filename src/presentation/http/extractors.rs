// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{
    Extension,
    body::to_bytes,
    extract::{FromRequest, FromRequestParts, Request},
};
use bytes::Bytes;
use http_body_util::LengthLimitError;

use super::error::HttpError;

/// The request body as raw bytes, read up to the configured body limit.
///
/// Reading stops as soon as the limit is exceeded, so an oversized body is
/// never buffered in full.
#[derive(Debug, Clone)]
pub struct RawBody(pub Bytes);

impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(&mut parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;
        let limit = app_state.services.body_limit();

        to_bytes(body, limit)
            .await
            .map(Self)
            .map_err(|err| HttpError::from_error(body_read_error(err, limit)))
    }
}

fn body_read_error(err: axum::Error, limit: usize) -> ApplicationError {
    let source = err.into_inner();
    if source.downcast_ref::<LengthLimitError>().is_some() {
        tracing::warn!(limit, "request body over the limit");
        ApplicationError::PayloadTooLarge { limit }
    } else {
        ApplicationError::infrastructure(format!("read request body: {source}"))
    }
}
