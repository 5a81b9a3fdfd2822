use serde::{Deserialize, Serialize};

use crate::slice::ConfigSlice;

/// Which word categories get pushed to Anki.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncScope {
    All,
    Learning,
    Want,
}

/// AnkiConnect integration settings.
///
/// The deck-name fields are optional in storage because configurations
/// written before the want/learning split only carried a single `deckName`.
/// The startup migration fills the new fields, so collaborators loaded
/// through the persistence layer can rely on them being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnkiConfig {
    pub enabled: bool,
    pub connect_url: String,
    pub model_name: String,
    #[serde(default)]
    pub deck_name_want: Option<String>,
    #[serde(default)]
    pub deck_name_learning: Option<String>,
    #[serde(default)]
    pub sync_scope: Option<SyncScope>,
    /// Deprecated single deck name; consumed by the migration and never
    /// written back once the split fields are populated.
    #[serde(rename = "deckName", default, skip_serializing_if = "Option::is_none")]
    pub legacy_deck_name: Option<String>,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            connect_url: "http://127.0.0.1:8765".to_string(),
            model_name: "Basic".to_string(),
            deck_name_want: Some("ReWord::Want".to_string()),
            deck_name_learning: Some("ReWord::Learning".to_string()),
            sync_scope: Some(SyncScope::All),
            legacy_deck_name: None,
        }
    }
}

impl ConfigSlice for AnkiConfig {
    const KEY: &'static str = "ankiConfig";

    fn default_value() -> Self {
        Self::default()
    }
}
