//! JSON plugin configuration.
//!
//! Read once at startup from `$PIP_OVERLAY_CONFIG`, or `pip_overlay.json` in
//! the working directory. Missing or invalid files fall back to defaults.
//! Nothing here is written back; layout state is never persisted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::constants::*;
use crate::platform::{AspectRatio, PipParams};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PluginConfig {
    /// Method channel name.
    pub channel: String,
    /// Fallback aspect ratio `[width, height]` when a call omits one.
    pub aspect_ratio: [u32; 2],
    pub auto_enter: bool,
    pub seamless_resize: bool,
    /// Layout selected when the session attaches.
    pub initial_layout: String,
    pub debug_logging: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            aspect_ratio: [DEFAULT_ASPECT_RATIO.0, DEFAULT_ASPECT_RATIO.1],
            auto_enter: DEFAULT_AUTO_ENTER,
            seamless_resize: DEFAULT_SEAMLESS_RESIZE,
            initial_layout: DEFAULT_LAYOUT.to_string(),
            debug_logging: false,
        }
    }
}

impl PluginConfig {
    /// Overlay parameters built from the configured defaults.
    pub fn default_params(&self) -> Result<PipParams> {
        Ok(PipParams {
            aspect_ratio: AspectRatio::new(self.aspect_ratio[0], self.aspect_ratio[1])?,
            auto_enter: self.auto_enter,
            seamless_resize: self.seamless_resize,
        })
    }
}

/// Config path: `$PIP_OVERLAY_CONFIG` or `./pip_overlay.json`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load config from the default location.
pub fn load() -> PluginConfig {
    load_from(&config_path())
}

/// Load config from `path`, returning defaults if not found or invalid.
pub fn load_from(path: &Path) -> PluginConfig {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no config file, using defaults");
            return PluginConfig::default();
        }
    };

    match parse(&contents) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            PluginConfig::default()
        }
    }
}

/// Parse and validate a config document.
pub fn parse(contents: &str) -> Result<PluginConfig> {
    let config: PluginConfig = serde_json::from_str(contents)?;
    config.default_params()?;
    Ok(config)
}
