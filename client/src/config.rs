//! Runtime configuration: where the API lives.
//!
//! Resolution is layered the same way the deployment expects: an environment
//! override first, then a `config.json` next to the binary, then a local
//! development default. The result is cached for the process lifetime.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const CONFIG_FILE: &str = "config.json";
const ENV_API_BASE_URL: &str = "STAFFDESK_API_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn load_config_file() -> anyhow::Result<RuntimeConfig> {
    let raw = std::fs::read_to_string(CONFIG_FILE)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Precedence: environment override, then config file, then the default.
fn resolve(env_url: Option<String>, file_config: Option<RuntimeConfig>) -> String {
    if let Some(url) = env_url.filter(|url| !url.trim().is_empty()) {
        return url;
    }
    if let Some(url) = file_config.and_then(|config| config.api_base_url) {
        return url;
    }
    DEFAULT_API_BASE_URL.to_string()
}

pub fn api_base_url() -> String {
    API_BASE_URL
        .get_or_init(|| {
            let file_config = match load_config_file() {
                Ok(config) => Some(config),
                Err(error) => {
                    log::debug!("no readable {}: {}", CONFIG_FILE, error);
                    None
                }
            };
            resolve(std::env::var(ENV_API_BASE_URL).ok(), file_config)
        })
        .clone()
}

/// Eagerly resolves and caches the base URL.
pub fn init() {
    let _ = api_base_url();
}
