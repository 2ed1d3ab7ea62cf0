// src/presentation/http/openapi.rs
use crate::application::dto::{KebabDto, KebabRequest};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::kebab::make_kebab,
        super::routes::health
    ),
    components(schemas(StatusResponse, KebabRequest, KebabDto)),
    tags(
        (name = "Kebab", description = "Kebab-case conversion"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Kebabify API",
        description = "Turns free text into kebab-case slugs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with `public_api_urls` listed as servers, followed
/// by the local default when it is not already among them.
pub fn openapi_document(public_api_urls: &[String]) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();

    let mut seen = HashSet::new();
    let servers = public_api_urls
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(DEFAULT_SERVER_URL))
        .filter(|url| seen.insert(*url))
        .map(Server::new)
        .collect();
    openapi.servers = Some(servers);
    openapi
}

/// Swagger UI at `/docs`, ReDoc at `/redoc` and the raw document at
/// `/openapi.json`.
pub fn docs_router(public_api_urls: &[String]) -> Router {
    let openapi = openapi_document(public_api_urls);
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot_to(path: &Path, public_api_urls: &[String]) -> std::io::Result<()> {
    let spec = openapi_document(public_api_urls);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
