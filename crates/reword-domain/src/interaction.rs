use serde::{Deserialize, Serialize};

use crate::slice::ConfigSlice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    Hover,
    Click,
    Off,
}

/// Word-bubble popup behavior when the user interacts with a highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInteractionConfig {
    pub trigger: TriggerMode,
    pub show_phonetic: bool,
    pub auto_pronounce: bool,
    pub bubble_delay_ms: u32,
}

impl Default for WordInteractionConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerMode::Hover,
            show_phonetic: true,
            auto_pronounce: false,
            bubble_delay_ms: 150,
        }
    }
}

impl ConfigSlice for WordInteractionConfig {
    const KEY: &'static str = "interactionConfig";

    fn default_value() -> Self {
        Self::default()
    }
}
