use std::path::Path;

use anyhow::{bail, Result};
use serde::Deserialize;

/// Environment variable that supplies the endpoint URL when no config file
/// sets one. The original deployment configured its endpoint this way.
pub const ENDPOINT_URL_VAR: &str = "SENTIMENT_ENDPOINT_URL";

/// Root configuration structure, deserialized from
/// `.sentiment-relay/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// The hosted model endpoint.
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

/// Where and how to reach the hosted classification model.
#[derive(Debug, Deserialize)]
pub struct EndpointConfig {
    /// Invocation URL of the model server. Required; may come from the
    /// environment instead of a file.
    #[serde(default)]
    pub url: String,
    /// Raw label token that marks the positive class.
    #[serde(default = "default_positive_marker")]
    pub positive_marker: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_positive_marker() -> String {
    "__label__2".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            url: String::new(),
            positive_marker: default_positive_marker(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Load the endpoint configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.sentiment-relay/config.toml`
/// 3. `~/.config/sentiment-relay/config.toml`
///
/// The `SENTIMENT_ENDPOINT_URL` environment variable overrides the URL from
/// any file. Fails fast when no source yields a URL: without an endpoint the
/// process cannot serve a single request.
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    let env_url = std::env::var(ENDPOINT_URL_VAR).ok();
    load_config_with_env(config_override, env_url)
}

fn load_config_with_env(
    config_override: Option<&Path>,
    env_url: Option<String>,
) -> Result<Config> {
    let mut config = read_config_file(config_override)?;

    if let Some(url) = env_url {
        if !url.trim().is_empty() {
            config.endpoint.url = url;
        }
    }

    if config.endpoint.url.trim().is_empty() {
        bail!(
            "no endpoint configured: set endpoint.url in a config file or {}",
            ENDPOINT_URL_VAR
        );
    }

    Ok(config)
}

fn read_config_file(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = Path::new(".sentiment-relay").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("sentiment-relay")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
