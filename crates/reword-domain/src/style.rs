use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entry::WordCategory;
use crate::slice::ConfigSlice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderlineStyle {
    None,
    Solid,
    Dashed,
    Dotted,
    Wavy,
}

/// How highlighted words of one category are rendered on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub color: String,
    #[serde(default)]
    pub background_color: Option<String>,
    pub underline: UnderlineStyle,
    #[serde(default)]
    pub bold: bool,
}

/// One style rule per word category.
pub type StyleMap = BTreeMap<WordCategory, StyleConfig>;

pub fn default_styles() -> StyleMap {
    let mut styles = BTreeMap::new();
    styles.insert(
        WordCategory::Want,
        StyleConfig {
            color: "#f59e0b".to_string(),
            background_color: None,
            underline: UnderlineStyle::Dotted,
            bold: false,
        },
    );
    styles.insert(
        WordCategory::Learning,
        StyleConfig {
            color: "#2563eb".to_string(),
            background_color: None,
            underline: UnderlineStyle::Solid,
            bold: true,
        },
    );
    styles.insert(
        WordCategory::Mastered,
        StyleConfig {
            color: "#16a34a".to_string(),
            background_color: None,
            underline: UnderlineStyle::None,
            bold: false,
        },
    );
    styles
}

impl ConfigSlice for StyleMap {
    const KEY: &'static str = "styles";

    fn default_value() -> Self {
        default_styles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_cover_every_category() {
        let styles = default_styles();
        assert!(styles.contains_key(&WordCategory::Want));
        assert!(styles.contains_key(&WordCategory::Learning));
        assert!(styles.contains_key(&WordCategory::Mastered));
    }

    #[test]
    fn test_style_map_keys_serialize_as_strings() {
        let json = serde_json::to_value(default_styles()).unwrap();
        assert!(json.get("learning").is_some());
        assert_eq!(json["learning"]["underline"], "solid");
    }
}
