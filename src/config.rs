use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use thiserror::Error;

use crate::imgur::DEFAULT_BASE_URL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub imgur_client_id: String,
    pub imgur_client_secret: String,
    pub imgur_base_url: String,
}

impl Config {
    /// Reads the configuration from the process environment, loading a
    /// `.env` file first if one is present.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = get_env_or_default(&lookup, "PORT", "8080");
        let port = port.parse::<u16>().map_err(|_| ConfigError::Invalid {
            key: "PORT",
            value: port.clone(),
        })?;

        Ok(Config {
            port,
            assets_dir: PathBuf::from(get_env_or_default(&lookup, "ASSETS_DIR", "assets")),
            imgur_client_id: get_env(&lookup, "IMGUR_CLIENT_ID")?,
            imgur_client_secret: get_env_or_default(&lookup, "IMGUR_CLIENT_SECRET", ""),
            imgur_base_url: get_env_or_default(&lookup, "IMGUR_BASE_URL", DEFAULT_BASE_URL),
        })
    }
}

fn get_env<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn get_env_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}
