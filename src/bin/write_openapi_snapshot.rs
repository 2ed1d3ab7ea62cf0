// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use kebabify::config::AppConfig;
use kebabify::presentation::http::openapi::write_openapi_snapshot_to;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let output_path = config.openapi_snapshot_path();
    write_openapi_snapshot_to(output_path, config.public_api_urls())?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
