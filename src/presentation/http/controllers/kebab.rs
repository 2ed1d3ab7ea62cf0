// src/presentation/http/controllers/kebab.rs
use crate::application::{commands::kebabs::MakeKebabCommand, dto::KebabDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RawBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// Convert a string to kebab-case and record the result in storage.
#[utoipa::path(
    post,
    path = "/kebab",
    request_body(
        content = crate::application::dto::KebabRequest,
        content_type = "application/json",
        description = "The input string to convert to kebab-case"
    ),
    responses(
        (status = 200, description = "The original input and the kebab-case result.", body = KebabDto),
        (status = 400, description = "Body over the limit or invalid JSON (plain text), or a JSON array of validation messages.", body = String, content_type = "text/plain"),
        (status = 500, description = "An unexpected error occurred.")
    ),
    tag = "Kebab"
)]
pub async fn make_kebab(
    Extension(state): Extension<HttpState>,
    RawBody(body): RawBody,
) -> HttpResult<Json<KebabDto>> {
    state
        .services
        .kebab_commands
        .make_kebab(MakeKebabCommand { body })
        .await
        .into_http()
        .map(Json)
}
