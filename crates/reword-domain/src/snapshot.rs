//! Point-in-time capture of every configuration slice.
//!
//! `AppSnapshot` is the single in-memory working copy of the durable state.
//! The persistence layer owns it: it is filled at load, handed to UI
//! collaborators by reference, written back by the autosave scheduler, and
//! replaced slice-by-slice on backup import.

use serde::{Deserialize, Serialize};

use crate::anki::AnkiConfig;
use crate::dictionary::DictionaryEngine;
use crate::engine::TranslationEngine;
use crate::entry::WordEntry;
use crate::interaction::WordInteractionConfig;
use crate::original_text::OriginalTextConfig;
use crate::scenario::Scenario;
use crate::slice::ConfigSlice;
use self::snapshot_defaults::*;
use crate::style::StyleMap;
use crate::translate::AutoTranslateConfig;
use crate::widget::PageWidgetConfig;

/// Full application state, one field per slice.
///
/// Fields absent from a serialized snapshot fall back to the slice defaults,
/// so older captures stay loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    #[serde(default = "default_entries")]
    pub entries: Vec<WordEntry>,

    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<Scenario>,

    #[serde(default = "default_page_widget")]
    pub page_widget_config: PageWidgetConfig,

    #[serde(default = "default_auto_translate")]
    pub auto_translate: AutoTranslateConfig,

    #[serde(default = "default_engines")]
    pub engines: Vec<TranslationEngine>,

    #[serde(default = "default_dictionaries")]
    pub dictionaries: Vec<DictionaryEngine>,

    #[serde(default = "default_anki")]
    pub anki_config: AnkiConfig,

    #[serde(default = "default_style_map")]
    pub styles: StyleMap,

    #[serde(default = "default_original_text")]
    pub original_text_config: OriginalTextConfig,

    #[serde(default = "default_interaction")]
    pub interaction_config: WordInteractionConfig,
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self {
            entries: ConfigSlice::default_value(),
            scenarios: ConfigSlice::default_value(),
            page_widget_config: ConfigSlice::default_value(),
            auto_translate: ConfigSlice::default_value(),
            engines: ConfigSlice::default_value(),
            dictionaries: ConfigSlice::default_value(),
            anki_config: ConfigSlice::default_value(),
            styles: ConfigSlice::default_value(),
            original_text_config: ConfigSlice::default_value(),
            interaction_config: ConfigSlice::default_value(),
        }
    }
}

impl AppSnapshot {
    pub fn new() -> Self {
        Self::default()
    }
}

mod snapshot_defaults {
    //! Free functions so serde `default = "..."` can reach the slice defaults.
    use super::*;

    pub fn default_entries() -> Vec<WordEntry> {
        ConfigSlice::default_value()
    }
    pub fn default_scenarios() -> Vec<Scenario> {
        ConfigSlice::default_value()
    }
    pub fn default_page_widget() -> PageWidgetConfig {
        ConfigSlice::default_value()
    }
    pub fn default_auto_translate() -> AutoTranslateConfig {
        ConfigSlice::default_value()
    }
    pub fn default_engines() -> Vec<TranslationEngine> {
        ConfigSlice::default_value()
    }
    pub fn default_dictionaries() -> Vec<DictionaryEngine> {
        ConfigSlice::default_value()
    }
    pub fn default_anki() -> AnkiConfig {
        ConfigSlice::default_value()
    }
    pub fn default_style_map() -> StyleMap {
        ConfigSlice::default_value()
    }
    pub fn default_original_text() -> OriginalTextConfig {
        ConfigSlice::default_value()
    }
    pub fn default_interaction() -> WordInteractionConfig {
        ConfigSlice::default_value()
    }
}
