pub mod anki;
pub mod dictionary;
pub mod engine;
pub mod entry;
pub mod interaction;
pub mod original_text;
pub mod scenario;
pub mod slice;
pub mod snapshot;
pub mod style;
pub mod translate;
pub mod widget;

pub use anki::{AnkiConfig, SyncScope};
pub use dictionary::{builtin_dictionaries, DictionaryEngine};
pub use engine::{builtin_engines, TranslationEngine};
pub use entry::{WordCategory, WordEntry, WordTab};
pub use interaction::{TriggerMode, WordInteractionConfig};
pub use original_text::OriginalTextConfig;
pub use scenario::{builtin_scenarios, Scenario};
pub use slice::ConfigSlice;
pub use snapshot::AppSnapshot;
pub use style::{default_styles, StyleConfig, StyleMap, UnderlineStyle};
pub use translate::AutoTranslateConfig;
pub use widget::{PageWidgetConfig, WidgetPosition};
