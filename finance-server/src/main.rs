#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use finance_lib::config::Config;
use finance_lib::transaction::TransactionService;

const SERVICE_NAME: &str = "finance-server";

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    let tracing_guard = tracing::subscriber::set_default(subscriber);
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(config_path = %config_path.display(), "Reading config file");
            Config::from_file(config_path)?
        }
        None => {
            info!("No config file found, reading config from environment");
            Config::from_env()?
        }
    };

    let telemetry_layer = match &config.telemetry {
        Some(telemetry_config) => Some(finance_lib::telemetry::create_opentelemetry_layer(
            SERVICE_NAME,
            telemetry_config,
        )?),
        None => None,
    };

    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default())
        .with(telemetry_layer);
    tracing::subscriber::set_global_default(subscriber).context("Unable to set up subscriber")?;
    drop(tracing_guard);

    let transaction_repo =
        finance_repo::sqlx_repo::create_repo(&config.database_url, config.max_pool_size).await?;
    let transaction_service = Data::new(TransactionService::new(transaction_repo));

    let allowed_origins = config.allowed_origins.clone();
    info!(?allowed_origins, bind_address = %config.bind_address, "Starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(finance_lib::cors::create_cors(&allowed_origins))
            .wrap(NormalizePath::trim())
            .wrap(finance_lib::telemetry::create_middleware())
            .configure(finance_lib::app_config_func(transaction_service.clone()))
    })
    .bind(config.bind_address.as_str())
    .with_context(|| format!("Unable to bind to {}", config.bind_address))?
    .run()
    .await?;

    Ok(())
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
