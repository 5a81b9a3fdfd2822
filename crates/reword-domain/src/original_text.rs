use serde::{Deserialize, Serialize};

use crate::slice::ConfigSlice;

/// How the untranslated original text is shown next to a replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalTextConfig {
    pub show_original: bool,
    pub dimmed: bool,
    pub font_scale: f32,
}

impl Default for OriginalTextConfig {
    fn default() -> Self {
        Self {
            show_original: true,
            dimmed: true,
            font_scale: 0.9,
        }
    }
}

impl ConfigSlice for OriginalTextConfig {
    const KEY: &'static str = "originalTextConfig";

    fn default_value() -> Self {
        Self::default()
    }
}
