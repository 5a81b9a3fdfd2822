use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ambient application configuration loaded from the user's config directory.
///
/// Everything here is optional; missing or unparsable files fall back to
/// defaults so a fresh install needs no setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewordConfig {
    /// Directory holding the per-slice JSON files. Defaults to the platform
    /// data directory under `reword/`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Quiet period in milliseconds before changed state is written back.
    #[serde(default)]
    pub autosave_delay_ms: Option<u64>,
}

impl RewordConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/reword/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("reword/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("reword\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                    tracing::warn!(
                        "Ignoring unparsable config at {}",
                        config_path.display()
                    );
                }
            }
        }
        Self::default()
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("reword")
        })
    }

    pub fn effective_autosave_delay_ms(&self) -> u64 {
        self.autosave_delay_ms.unwrap_or(800)
    }
}
