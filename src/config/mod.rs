mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Loads `CONFIG_PATH` (default `config.yaml`) if it exists, then applies
/// the API key from the environment.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let api_key = env::var(API_KEY_ENV).ok();
    load_from(&config_path, api_key).await
}

pub async fn load_from(path: impl AsRef<Path>, api_key: Option<String>) -> Result<Config> {
    let path = path.as_ref();

    let mut config = if tokio::fs::try_exists(path).await? {
        debug!("Loading configuration from: {}", path.display());
        let config_str = tokio::fs::read_to_string(path).await?;
        serde_yaml::from_str::<Config>(&config_str)?
    } else {
        debug!("No configuration file at {}, using defaults", path.display());
        Config::default()
    };

    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.upstream.api_key = Some(key);
    }

    Ok(config)
}
