use serde::{Deserialize, Serialize};

use reword_domain::{
    AnkiConfig, AutoTranslateConfig, DictionaryEngine, OriginalTextConfig, PageWidgetConfig,
    Scenario, StyleMap, TranslationEngine, WordEntry, WordInteractionConfig,
};

/// Format tag written into every export. A loader accepts documents from
/// this version and older; forward compatibility is not promised.
pub const BACKUP_FORMAT_VERSION: &str = "3.3.0";

pub const APP_LABEL: &str = "ReWord";

/// Whole-state backup artifact.
///
/// Every slice is optional on the wire: restore only replaces the slices a
/// document actually carries (partial merge). An export always fills all of
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<WordEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<Scenario>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_widget_config: Option<PageWidgetConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_translate: Option<AutoTranslateConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engines: Option<Vec<TranslationEngine>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionaries: Option<Vec<DictionaryEngine>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anki_config: Option<AnkiConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text_config: Option<OriginalTextConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_config: Option<WordInteractionConfig>,

    /// Creation time, epoch milliseconds.
    pub timestamp: i64,

    pub version: String,

    pub app: String,
}
