//! Chat widget configuration
//!
//! Defaults are compiled in (`CHAT_ENDPOINT` may be set at build time).
//! A TOML document stored under the `chat-config` localStorage key
//! overrides them at runtime:
//!
//! ```toml
//! [chat]
//! endpoint = "https://example.com/chat"
//! request_timeout_secs = 30
//! ```

use serde::Deserialize;
use web_sys::window;

const DEFAULT_ENDPOINT: &str = "http://localhost:8000/chat";
const CONFIG_STORAGE_KEY: &str = "chat-config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// No timeout when absent or zero
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: None,
        }
    }
}

impl ChatConfig {
    /// Timeout in milliseconds as expected by `gloo_timers`
    pub fn timeout_ms(&self) -> Option<u32> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(|secs| u32::try_from(secs.saturating_mul(1000)).unwrap_or(u32::MAX))
    }
}

fn default_endpoint() -> String {
    option_env!("CHAT_ENDPOINT")
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}

pub fn parse_config(contents: &str) -> Result<Config, String> {
    let config: Config = toml::from_str(contents).map_err(|e| format!("{}", e))?;
    if config.chat.endpoint.trim().is_empty() {
        return Err("chat.endpoint must not be empty".to_string());
    }
    Ok(config)
}

fn load_config_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
}

/// Load configuration
///
/// Search order:
/// 1. `chat-config` in localStorage
/// 2. Compiled-in defaults
pub fn load_config() -> Config {
    if let Some(contents) = load_config_from_storage() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loaded chat config from localStorage: {}", config.chat.endpoint);
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid {} in localStorage: {}", CONFIG_STORAGE_KEY, e),
        }
    }

    let config = Config::default();
    log::info!("Using default chat config: {}", config.chat.endpoint);
    config
}
