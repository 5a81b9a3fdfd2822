//! One-shot parse of startup navigation parameters.
//!
//! A deep link selects the initial view only. Nothing here subscribes to
//! later parameter changes; the intent is consumed exactly once at startup.

use reword_domain::WordTab;
use url::form_urlencoded;

/// Which view the application should open with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupIntent {
    Dashboard,
    WordDetail { word: String },
    WordList {
        tab: Option<WordTab>,
        search: Option<String>,
    },
}

impl StartupIntent {
    /// Parse a raw query string (with or without the leading `?`).
    ///
    /// `view=word-detail` without a usable `word` falls back to the
    /// dashboard, and an unrecognized `tab` value is treated as absent.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut view = None;
        let mut word = None;
        let mut tab = None;
        let mut search = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "view" => view = Some(value.into_owned()),
                "word" => word = Some(value.into_owned()),
                "tab" => tab = Some(value.into_owned()),
                "search" => search = Some(value.into_owned()),
                _ => {}
            }
        }

        match view.as_deref() {
            Some("word-detail") => match word.filter(|w| !w.is_empty()) {
                Some(word) => Self::WordDetail { word },
                None => Self::Dashboard,
            },
            Some("words") => Self::WordList {
                tab: tab.and_then(|t| t.parse().ok()),
                search: search.filter(|s| !s.is_empty()),
            },
            _ => Self::Dashboard,
        }
    }

    pub fn from_url(url: &url::Url) -> Self {
        Self::from_query(url.query().unwrap_or(""))
    }
}
