use futures::future::join_all;
use reword_core::{RewordError, RewordResult};
use reword_domain::{AppSnapshot, ConfigSlice};
use serde_json::Value;

use crate::backup::document::BackupDocument;
use crate::serialization::slice_value;
use crate::traits::SliceStore;

pub struct BackupImporter;

impl BackupImporter {
    /// Parse and validate an uploaded document. No state is touched until
    /// this returns `Ok`: a document whose `entries` field is missing or is
    /// not an array is rejected outright.
    pub fn parse(json: &str) -> RewordResult<BackupDocument> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| RewordError::BackupFormat(format!("not valid JSON: {e}")))?;

        match value.get("entries") {
            None => {
                return Err(RewordError::BackupFormat(
                    "'entries' array missing".to_string(),
                ))
            }
            Some(entries) if !entries.is_array() => {
                return Err(RewordError::BackupFormat(
                    "'entries' is not an array".to_string(),
                ))
            }
            Some(_) => {}
        }

        let document: BackupDocument = serde_json::from_value(value)
            .map_err(|e| RewordError::BackupFormat(e.to_string()))?;

        tracing::info!(
            "Parsed backup document (version {}, {} entries)",
            document.version,
            document.entries.as_ref().map_or(0, Vec::len)
        );
        Ok(document)
    }

    /// Restore a parsed document: each slice present in the document
    /// replaces the in-memory slice and is written to storage; absent slices
    /// stay untouched in both. Returns how many slices were restored.
    ///
    /// The caller gates the autosave scheduler around this call. If any
    /// storage write fails, memory has already been replaced — the error
    /// names the slices left unpersisted, and the next autosave settle
    /// retries them.
    pub async fn apply<S: SliceStore + ?Sized>(
        document: BackupDocument,
        snapshot: &mut AppSnapshot,
        store: &S,
    ) -> RewordResult<usize> {
        let mut pending: Vec<(&'static str, Value)> = Vec::new();

        fn stage<T: ConfigSlice>(
            field: Option<T>,
            target: &mut T,
            pending: &mut Vec<(&'static str, Value)>,
        ) -> RewordResult<()> {
            if let Some(value) = field {
                pending.push(slice_value(&value)?);
                *target = value;
            }
            Ok(())
        }

        stage(document.entries, &mut snapshot.entries, &mut pending)?;
        stage(document.scenarios, &mut snapshot.scenarios, &mut pending)?;
        stage(
            document.page_widget_config,
            &mut snapshot.page_widget_config,
            &mut pending,
        )?;
        stage(
            document.auto_translate,
            &mut snapshot.auto_translate,
            &mut pending,
        )?;
        stage(document.engines, &mut snapshot.engines, &mut pending)?;
        stage(
            document.dictionaries,
            &mut snapshot.dictionaries,
            &mut pending,
        )?;
        stage(document.anki_config, &mut snapshot.anki_config, &mut pending)?;
        stage(document.styles, &mut snapshot.styles, &mut pending)?;
        stage(
            document.original_text_config,
            &mut snapshot.original_text_config,
            &mut pending,
        )?;
        stage(
            document.interaction_config,
            &mut snapshot.interaction_config,
            &mut pending,
        )?;

        let restored = pending.len();
        let writes = pending.into_iter().map(|(key, value)| async move {
            (key, store.write_value(key, value).await)
        });

        let mut failed: Vec<&'static str> = Vec::new();
        for (key, result) in join_all(writes).await {
            if let Err(e) = result {
                tracing::error!("Import failed to persist slice '{}': {}", key, e);
                failed.push(key);
            }
        }

        if failed.is_empty() {
            tracing::info!("Imported {} slice(s) from backup", restored);
            Ok(restored)
        } else {
            Err(RewordError::BackupWrite(format!(
                "restored to memory, but {} slice(s) were not persisted: {}",
                failed.len(),
                failed.join(", ")
            )))
        }
    }
}
