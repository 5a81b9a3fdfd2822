use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::slice::ConfigSlice;

/// Learning stage a word belongs to; also keys the visual style map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Want,
    Learning,
    Mastered,
}

/// Tab selection in the word list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordTab {
    All,
    Want,
    Learning,
    Mastered,
}

impl FromStr for WordTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "want" => Ok(Self::Want),
            "learning" => Ok(Self::Learning),
            "mastered" => Ok(Self::Mastered),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    pub translation: String,
    pub category: WordCategory,
    #[serde(default)]
    pub scenario_id: Option<String>,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, translation: impl Into<String>, category: WordCategory) -> Self {
        let now = Utc::now();
        Self {
            word: word.into(),
            translation: translation.into(),
            category,
            scenario_id: None,
            phonetic: None,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl ConfigSlice for Vec<WordEntry> {
    const KEY: &'static str = "entries";

    fn default_value() -> Self {
        Vec::new()
    }
}
