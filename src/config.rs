// src/config.rs
use crate::application::commands::kebabs::DEFAULT_BODY_LIMIT;
use std::{
    env,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    max_body_bytes: usize,
    storage: StorageConfig,
    public_api_urls: Vec<String>,
    openapi_snapshot_path: PathBuf,
}

/// Where converted kebabs are recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageConfig {
    /// `<root>/<container>/<uuid>.json` on the local filesystem.
    Local { root: PathBuf, container: String },
    /// Azure Blob Storage container addressed by URL.
    Azure {
        container_url: String,
        sas_token: Option<String>,
    },
    /// Process memory only.
    Memory,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("./data")
}

fn default_container() -> String {
    "kebabs".into()
}

fn default_openapi_snapshot_path() -> PathBuf {
    PathBuf::from("spec/openapi.json")
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::Invalid(format!(
                        "MAX_BODY_BYTES must be a positive integer, got '{raw}'"
                    )));
                }
                Ok(value) => value,
            },
            None => DEFAULT_BODY_LIMIT,
        };

        let storage = storage_from_lookup(&lookup)?;
        let public_api_urls = public_api_urls_from_lookup(&lookup);
        let openapi_snapshot_path = lookup("OPENAPI_SNAPSHOT_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_openapi_snapshot_path);

        Ok(Self {
            listen_addr,
            max_body_bytes,
            storage,
            public_api_urls,
            openapi_snapshot_path,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Public base URLs advertised as servers in the OpenAPI document.
    pub fn public_api_urls(&self) -> &[String] {
        &self.public_api_urls
    }

    pub fn openapi_snapshot_path(&self) -> &Path {
        &self.openapi_snapshot_path
    }
}

/// `PUBLIC_API_URLS` (comma separated) wins over `PUBLIC_API_URL`.
fn public_api_urls_from_lookup<F>(lookup: &F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let parse = |raw: String| -> Vec<String> {
        raw.split(',')
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect()
    };

    let urls = lookup("PUBLIC_API_URLS").map(parse).unwrap_or_default();
    if urls.is_empty() {
        lookup("PUBLIC_API_URL").map(parse).unwrap_or_default()
    } else {
        urls
    }
}

fn storage_from_lookup<F>(lookup: &F) -> Result<StorageConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let backend = lookup("STORAGE_BACKEND")
        .map(|v| v.trim().to_lowercase())
        .unwrap_or_else(|| "local".into());

    match backend.as_str() {
        "local" => {
            let root = lookup("STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(default_storage_root);
            let container = lookup("STORAGE_CONTAINER").unwrap_or_else(default_container);
            if container.trim().is_empty() || container.contains(['/', '\\']) {
                return Err(ConfigError::Invalid(format!(
                    "STORAGE_CONTAINER must be a plain directory name, got '{container}'"
                )));
            }
            Ok(StorageConfig::Local { root, container })
        }
        "azure" => {
            let container_url = lookup("AZURE_STORAGE_CONTAINER_URL")
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing("AZURE_STORAGE_CONTAINER_URL"))?;
            let sas_token = lookup("AZURE_STORAGE_SAS_TOKEN").filter(|v| !v.trim().is_empty());
            Ok(StorageConfig::Azure {
                container_url,
                sas_token,
            })
        }
        "memory" => Ok(StorageConfig::Memory),
        other => Err(ConfigError::Invalid(format!(
            "STORAGE_BACKEND must be one of local, azure, memory; got '{other}'"
        ))),
    }
}
