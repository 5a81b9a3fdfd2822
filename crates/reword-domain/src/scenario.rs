use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slice::ConfigSlice;

/// A learning scenario groups words by the context they were collected in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Scenario {
    /// User-created scenarios get a generated id; built-ins use fixed slugs
    /// so migrations and deep links can refer to them.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
        }
    }

    fn builtin(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
        }
    }
}

pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::builtin("daily", "Daily Life", "Everyday conversation and errands"),
        Scenario::builtin("work", "Work", "Office, meetings, and email"),
        Scenario::builtin("tech", "Technology", "Software and technical reading"),
    ]
}

impl ConfigSlice for Vec<Scenario> {
    const KEY: &'static str = "scenarios";

    fn default_value() -> Self {
        builtin_scenarios()
    }
}
