use std::path::PathBuf;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_core::CatalogConfig;
use catalog_server::middleware::LoggingMiddleware;
use catalog_storage::CatalogEngine;

/// Path of the TOML config file; defaults apply when unset.
const CONFIG_ENV: &str = "CATALOG_CONFIG";

fn load_config() -> anyhow::Result<CatalogConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            CatalogConfig::load(&path)
                .with_context(|| format!("loading config from {}", path.display()))
        }
        None => Ok(CatalogConfig::default()),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    let engine = CatalogEngine::open(&config).context("opening catalog storage")?;
    let engine = web::Data::new(engine);

    info!(bind = %config.server.bind_addr, "catalog server starting");

    HttpServer::new(move || {
        App::new()
            .wrap(LoggingMiddleware)
            .app_data(engine.clone())
            .configure(catalog_server::configure)
    })
    .bind(config.server.bind_addr.as_str())
    .with_context(|| format!("binding {}", config.server.bind_addr))?
    .run()
    .await?;

    Ok(())
}
