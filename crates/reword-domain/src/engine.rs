use serde::{Deserialize, Serialize};

use crate::slice::ConfigSlice;

/// A machine-translation backend the user can enable and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEngine {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl TranslationEngine {
    fn builtin(id: &str, name: &str, enabled: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            enabled,
            api_key: None,
        }
    }
}

pub fn builtin_engines() -> Vec<TranslationEngine> {
    vec![
        TranslationEngine::builtin("google", "Google Translate", true),
        TranslationEngine::builtin("bing", "Bing Translator", true),
        TranslationEngine::builtin("deepl", "DeepL", false),
    ]
}

impl ConfigSlice for Vec<TranslationEngine> {
    const KEY: &'static str = "engines";

    fn default_value() -> Self {
        builtin_engines()
    }
}
