// src/infrastructure/storage/azure.rs
use super::{
    CONTENT_TYPE_JSON, encode,
    error::{map_reqwest, unexpected_status},
    new_blob_name,
};
use crate::{
    application::{ApplicationResult, error::ApplicationError, ports::storage::KebabStore},
    domain::kebab::Kebab,
};
use anyhow::{Context, bail};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header::CONTENT_TYPE};
use std::time::Duration;
use tokio::sync::OnceCell;

const API_VERSION: &str = "2021-08-06";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(100);

/// Azure Blob Storage over its REST API.
///
/// The container is created once per process on the first write; an
/// existing container is fine. Authentication is a SAS token carried in the
/// query string.
pub struct AzureBlobStore {
    client: Client,
    container_url: Url,
    sas_token: Option<String>,
    container_ready: OnceCell<()>,
}

impl AzureBlobStore {
    pub fn new(container_url: &str, sas_token: Option<String>) -> anyhow::Result<Self> {
        let mut url = Url::parse(container_url)
            .with_context(|| format!("invalid blob container url: {container_url}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("blob container url must use http or https: {container_url}");
        }

        // a SAS token pasted into the url is used when none is given separately
        let embedded = url.query().map(str::to_string);
        url.set_query(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
        }
        let sas_token = sas_token
            .or(embedded)
            .map(|token| token.trim_start_matches('?').to_string())
            .filter(|token| !token.is_empty());

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build blob storage http client")?;

        Ok(Self {
            client,
            container_url: url,
            sas_token,
            container_ready: OnceCell::new(),
        })
    }

    fn url(&self, blob: Option<&str>, extra_query: Option<&str>) -> ApplicationResult<Url> {
        let mut url = self.container_url.clone();
        if let Some(name) = blob {
            url.path_segments_mut()
                .map_err(|_| ApplicationError::infrastructure("blob container url cannot be a base"))?
                .pop_if_empty()
                .push(name);
        }

        let query = [extra_query, self.sas_token.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("&");
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        Ok(url)
    }

    async fn ensure_container(&self) -> ApplicationResult<()> {
        self.container_ready
            .get_or_try_init(|| self.create_container())
            .await
            .map(|_| ())
    }

    async fn create_container(&self) -> ApplicationResult<()> {
        let url = self.url(None, Some("restype=container"))?;
        let response = self
            .client
            .put(url)
            .header("x-ms-version", API_VERSION)
            .header("content-length", "0")
            .send()
            .await
            .map_err(map_reqwest)?;

        match response.status() {
            status if status.is_success() => {
                tracing::info!("blob container created");
                Ok(())
            }
            StatusCode::CONFLICT => Ok(()),
            status => Err(unexpected_status("create container", status).into()),
        }
    }
}

#[async_trait]
impl KebabStore for AzureBlobStore {
    async fn store(&self, kebab: &Kebab) -> ApplicationResult<()> {
        self.ensure_container().await?;

        let bytes = encode(kebab)?;
        let name = new_blob_name();
        let url = self.url(Some(&name), None)?;

        let response = self
            .client
            .put(url)
            .header("x-ms-version", API_VERSION)
            .header("x-ms-blob-type", "BlockBlob")
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(bytes)
            .send()
            .await
            .map_err(map_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status("upload blob", status).into());
        }

        tracing::debug!(blob = %name, "kebab uploaded to blob container");
        Ok(())
    }
}
