use serde::de::DeserializeOwned;
use serde::Serialize;

/// A named, independently-stored partition of application state.
///
/// Each slice owns a stable storage key and a default value used whenever
/// the slice is absent or unreadable. Slices never reference each other in
/// storage, which is what makes partial restore and partial migration safe.
pub trait ConfigSlice: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Stable storage key; doubles as the field name in backup documents.
    const KEY: &'static str;

    /// Value substituted when nothing usable is stored under `KEY`.
    fn default_value() -> Self;
}
