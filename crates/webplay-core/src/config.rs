use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::http::HttpTimeouts;
use crate::retry::RetryPolicy;
use crate::scan::ScanOptions;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 5,
        }
    }
}

/// Global configuration loaded from `~/.config/webplay/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebplayConfig {
    /// Connect timeout for HEAD probes and page fetches, in seconds.
    pub connect_timeout_secs: u64,
    /// Total per-request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Explicit player executable; skips discovery and the persisted path.
    #[serde(default)]
    pub player_path: Option<String>,
    /// Extra content-type tokens accepted as media (e.g. "mpegurl").
    #[serde(default)]
    pub extra_content_types: Vec<String>,
}

impl Default for WebplayConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            retry: None,
            player_path: None,
            extra_content_types: Vec::new(),
        }
    }
}

impl WebplayConfig {
    pub fn http_timeouts(&self) -> HttpTimeouts {
        HttpTimeouts {
            connect: Duration::from_secs(self.connect_timeout_secs),
            total: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(|r| RetryPolicy {
                max_attempts: r.max_attempts,
                base_delay: Duration::from_secs_f64(r.base_delay_secs),
                max_delay: Duration::from_secs(r.max_delay_secs),
            })
            .unwrap_or_default()
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            timeouts: self.http_timeouts(),
            retry: self.retry_policy(),
            extra_content_types: self.extra_content_types.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("webplay")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WebplayConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WebplayConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WebplayConfig = toml::from_str(&data)?;
    Ok(cfg)
}
