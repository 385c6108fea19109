use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::{env, fs};

const DEFAULT_DATABASE_URL: &str = "sqlite://finance.db";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_MAX_POOL_SIZE: u32 = 10;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// OTLP trace export. Headers are sent as gRPC metadata with every export.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TelemetryConfig {
    pub endpoint: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    pub telemetry: Option<TelemetryConfig>,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

fn default_allowed_origins() -> Vec<String> {
    vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: default_database_url(),
            bind_address: default_bind_address(),
            max_pool_size: default_max_pool_size(),
            allowed_origins: default_allowed_origins(),
            telemetry: None,
        }
    }
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        Config::from_toml(&config)
    }

    pub fn from_toml(config: &str) -> Result<Config, anyhow::Error> {
        toml::from_str(config).context("Unable to parse config")
    }

    /// Reads the config from environment variables, using defaults for any
    /// that are unset.
    pub fn from_env() -> Result<Config, anyhow::Error> {
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(read_var: F) -> Result<Config, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| read_var(key).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(database_url) = read("DATABASE_URL") {
            config.database_url = database_url;
        }
        if let Some(bind_address) = read("BIND_ADDRESS") {
            config.bind_address = bind_address;
        }
        if let Some(max_pool_size) = read("MAX_POOL_SIZE") {
            config.max_pool_size = max_pool_size
                .parse()
                .context("Unable to parse MAX_POOL_SIZE value")?;
        }
        if let Some(allowed_origins) = read("ALLOWED_ORIGINS") {
            config.allowed_origins = parse_origins(&allowed_origins);
        }
        if let Some(endpoint) = read("OTLP_ENDPOINT") {
            config.telemetry = Some(TelemetryConfig {
                endpoint,
                headers: HashMap::new(),
            });
        }

        Ok(config)
    }
}

fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
