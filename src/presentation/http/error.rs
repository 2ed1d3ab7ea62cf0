use crate::{
    application::{ApplicationResult, error::ApplicationError},
    domain::errors::DomainError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const BODY_OVER_LIMIT_MESSAGE: &str = "Request body over the limit";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid JSON or empty input";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ErrorBody,
}

/// What a failed request sends back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// Plain text message.
    Message(String),
    /// JSON array of field validation messages.
    Messages(Vec<String>),
    /// Nothing; internal details stay in the logs.
    Empty,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::PayloadTooLarge { .. } => {
                Self::bad_request(ErrorBody::Message(BODY_OVER_LIMIT_MESSAGE.into()))
            }
            ApplicationError::InvalidPayload => {
                Self::bad_request(ErrorBody::Message(INVALID_INPUT_MESSAGE.into()))
            }
            ApplicationError::Domain(DomainError::Validation(msg)) => {
                Self::bad_request(ErrorBody::Messages(vec![msg]))
            }
            err @ (ApplicationError::Domain(DomainError::Persistence(_))
            | ApplicationError::Infrastructure(_)) => {
                tracing::error!(error = %err, "failed to make kebab");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::Empty)
            }
        }
    }

    fn bad_request(body: ErrorBody) -> Self {
        Self::new(StatusCode::BAD_REQUEST, body)
    }

    fn new(status: StatusCode, body: ErrorBody) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.body {
            ErrorBody::Message(message) => (self.status, message).into_response(),
            ErrorBody::Messages(messages) => (self.status, Json(messages)).into_response(),
            ErrorBody::Empty => self.status.into_response(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
