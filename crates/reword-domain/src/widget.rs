use serde::{Deserialize, Serialize};

use crate::slice::ConfigSlice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Floating review widget injected into visited pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWidgetConfig {
    pub enabled: bool,
    pub position: WidgetPosition,
    pub word_count: u32,
    pub rotate_interval_secs: u32,
    #[serde(default)]
    pub blocked_sites: Vec<String>,
}

impl Default for PageWidgetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: WidgetPosition::BottomRight,
            word_count: 5,
            rotate_interval_secs: 30,
            blocked_sites: Vec::new(),
        }
    }
}

impl ConfigSlice for PageWidgetConfig {
    const KEY: &'static str = "pageWidgetConfig";

    fn default_value() -> Self {
        Self::default()
    }
}
