//! Process-wide configuration.
//!
//! Loaded once at startup from an optional `config.toml` in the working
//! directory, then overridden field by field from the environment. The
//! credential is read once here and never refreshed.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_PATH: &str = "config.toml";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bearer credential for the remote generation endpoint.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Override for the generation endpoint base URL.
    #[serde(default)]
    pub api_base: Option<String>,
    /// Default model name for every chain.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Optional whole-request timeout applied to the HTTP client.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            model: None,
            host: default_host(),
            port: default_port(),
            request_timeout_secs: None,
        }
    }
}

fn parse_port(value: &str) -> Option<u16> {
    match value.trim().parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            warn!("ignoring unparseable port value {value:?}");
            None
        }
    }
}

fn parse_secs(value: &str) -> Option<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) => Some(secs),
        Err(_) => {
            warn!("ignoring unparseable timeout value {value:?}");
            None
        }
    }
}

impl Config {
    /// Load configuration from `config.toml` (if present) and the
    /// environment. Environment variables win over the file.
    pub fn new() -> Self {
        let mut config = Self::from_file(Path::new(CONFIG_FILE_PATH));

        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(api_base) = std::env::var("GROQ_API_BASE") {
            config.api_base = Some(api_base);
        }
        if let Ok(model) = std::env::var("CHAINSERVE_MODEL") {
            config.model = Some(model);
        }
        if let Ok(host) = std::env::var("CHAINSERVE_HOST") {
            config.host = host;
        }
        if let Some(port) = std::env::var("CHAINSERVE_PORT")
            .ok()
            .and_then(|value| parse_port(&value))
        {
            config.port = port;
        }
        if let Some(secs) = std::env::var("CHAINSERVE_TIMEOUT_SECS")
            .ok()
            .and_then(|value| parse_secs(&value))
        {
            config.request_timeout_secs = Some(secs);
        }

        config
    }

    fn from_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed to parse {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
