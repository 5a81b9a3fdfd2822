use chrono::Utc;
use reword_core::{RewordError, RewordResult};
use reword_domain::AppSnapshot;
use std::path::{Path, PathBuf};

use crate::backup::document::{BackupDocument, APP_LABEL, BACKUP_FORMAT_VERSION};

pub struct BackupExporter;

impl BackupExporter {
    /// Capture every current slice into one document. Reads state only;
    /// neither the snapshot nor storage is mutated.
    pub fn export(snapshot: &AppSnapshot) -> BackupDocument {
        BackupDocument {
            entries: Some(snapshot.entries.clone()),
            scenarios: Some(snapshot.scenarios.clone()),
            page_widget_config: Some(snapshot.page_widget_config.clone()),
            auto_translate: Some(snapshot.auto_translate.clone()),
            engines: Some(snapshot.engines.clone()),
            dictionaries: Some(snapshot.dictionaries.clone()),
            anki_config: Some(snapshot.anki_config.clone()),
            styles: Some(snapshot.styles.clone()),
            original_text_config: Some(snapshot.original_text_config.clone()),
            interaction_config: Some(snapshot.interaction_config.clone()),
            timestamp: Utc::now().timestamp_millis(),
            version: BACKUP_FORMAT_VERSION.to_string(),
            app: APP_LABEL.to_string(),
        }
    }

    pub fn to_json_string(document: &BackupDocument) -> RewordResult<String> {
        serde_json::to_string_pretty(document)
            .map_err(|e| RewordError::Serialization(e.to_string()))
    }

    /// `reword_backup_<ISO date>.json`, the filename users see in downloads.
    pub fn suggested_filename() -> String {
        format!("reword_backup_{}.json", Utc::now().format("%Y-%m-%d"))
    }

    pub async fn write_to_dir(document: &BackupDocument, dir: &Path) -> RewordResult<PathBuf> {
        let path = dir.join(Self::suggested_filename());
        let json = Self::to_json_string(document)?;
        tokio::fs::write(&path, json).await?;
        tracing::info!("Exported backup to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reword_domain::{WordCategory, WordEntry};

    #[test]
    fn test_export_fills_every_slice() {
        let mut snapshot = AppSnapshot::new();
        snapshot
            .entries
            .push(WordEntry::new("apple", "苹果", WordCategory::Want));

        let document = BackupExporter::export(&snapshot);
        assert_eq!(document.entries.as_ref().unwrap().len(), 1);
        assert!(document.scenarios.is_some());
        assert!(document.styles.is_some());
        assert_eq!(document.version, BACKUP_FORMAT_VERSION);
        assert_eq!(document.app, APP_LABEL);
    }

    #[test]
    fn test_export_does_not_mutate_state() {
        let snapshot = AppSnapshot::new();
        let before = snapshot.clone();
        let _ = BackupExporter::export(&snapshot);
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_suggested_filename_contains_iso_date() {
        let name = BackupExporter::suggested_filename();
        assert!(name.starts_with("reword_backup_"));
        assert!(name.ends_with(".json"));
        // reword_backup_YYYY-MM-DD.json
        assert_eq!(name.len(), "reword_backup_".len() + 10 + ".json".len());
    }

    #[tokio::test]
    async fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let document = BackupExporter::export(&AppSnapshot::new());

        let path = BackupExporter::write_to_dir(&document, dir.path())
            .await
            .unwrap();
        assert!(path.exists());

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("\"version\": \"3.3.0\""));
    }
}
