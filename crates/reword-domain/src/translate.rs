use serde::{Deserialize, Serialize};

use crate::slice::ConfigSlice;

/// In-page auto-translation behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoTranslateConfig {
    pub enabled: bool,
    pub target_language: String,
    pub tts_speed: f32,
    #[serde(default)]
    pub blocked_sites: Vec<String>,
}

impl Default for AutoTranslateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target_language: "zh-CN".to_string(),
            tts_speed: 1.0,
            blocked_sites: Vec::new(),
        }
    }
}

impl ConfigSlice for AutoTranslateConfig {
    const KEY: &'static str = "autoTranslate";

    fn default_value() -> Self {
        Self::default()
    }
}
