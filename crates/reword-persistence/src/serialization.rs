//! Helpers that turn slices into the `(storage key, JSON value)` pairs the
//! store operates on.

use reword_core::{RewordError, RewordResult};
use reword_domain::{AppSnapshot, ConfigSlice};
use serde_json::Value;

/// Serialize one slice together with its storage key.
pub fn slice_value<S: ConfigSlice>(slice: &S) -> RewordResult<(&'static str, Value)> {
    let value = serde_json::to_value(slice)
        .map_err(|e| RewordError::Serialization(format!("slice '{}': {e}", S::KEY)))?;
    Ok((S::KEY, value))
}

/// Serialize every slice of a snapshot, in storage-key order.
pub fn snapshot_slice_values(snapshot: &AppSnapshot) -> RewordResult<Vec<(&'static str, Value)>> {
    Ok(vec![
        slice_value(&snapshot.entries)?,
        slice_value(&snapshot.scenarios)?,
        slice_value(&snapshot.page_widget_config)?,
        slice_value(&snapshot.auto_translate)?,
        slice_value(&snapshot.engines)?,
        slice_value(&snapshot.dictionaries)?,
        slice_value(&snapshot.anki_config)?,
        slice_value(&snapshot.styles)?,
        slice_value(&snapshot.original_text_config)?,
        slice_value(&snapshot.interaction_config)?,
    ])
}
