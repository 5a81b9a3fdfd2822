use serde::{Deserialize, Serialize};

use crate::slice::ConfigSlice;

/// Well-known dictionary ids referenced by the priority migration.
pub const ICIBA: &str = "iciba";
pub const YOUDAO: &str = "youdao";

/// A dictionary lookup backend. Lower `priority` is consulted first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEngine {
    pub id: String,
    pub name: String,
    pub priority: u32,
    pub enabled: bool,
}

impl DictionaryEngine {
    fn builtin(id: &str, name: &str, priority: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            priority,
            enabled: true,
        }
    }
}

pub fn builtin_dictionaries() -> Vec<DictionaryEngine> {
    vec![
        DictionaryEngine::builtin(ICIBA, "iCIBA", 1),
        DictionaryEngine::builtin(YOUDAO, "Youdao", 2),
        DictionaryEngine::builtin("bing-dict", "Bing Dictionary", 3),
    ]
}

impl ConfigSlice for Vec<DictionaryEngine> {
    const KEY: &'static str = "dictionaries";

    fn default_value() -> Self {
        builtin_dictionaries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_priority_order() {
        let dicts = builtin_dictionaries();
        assert_eq!(dicts[0].id, ICIBA);
        assert_eq!(dicts[0].priority, 1);
        assert_eq!(dicts[1].id, YOUDAO);
        assert_eq!(dicts[1].priority, 2);
    }
}
