//! The designated owner of the in-memory state.
//!
//! `StateManager` is the only component that touches storage: it loads and
//! migrates every slice before collaborators see them, funnels all mutations
//! through [`StateManager::update`] so the autosave scheduler observes each
//! one, and coordinates backup export/import with the scheduler's gate.

use std::sync::Arc;
use std::time::Duration;

use reword_core::{RewordConfig, RewordResult};
use reword_domain::AppSnapshot;
use reword_persistence::backup::{BackupDocument, BackupExporter, BackupImporter};
use reword_persistence::{AutosaveScheduler, JsonSliceStore, Migrator, SliceStore, SliceStoreExt};

pub struct StateManager {
    store: Arc<JsonSliceStore>,
    autosave: AutosaveScheduler,
    snapshot: AppSnapshot,
}

impl StateManager {
    /// Open the store described by the ambient config and run the full load
    /// phase.
    pub async fn load(config: &RewordConfig) -> RewordResult<Self> {
        let store = Arc::new(JsonSliceStore::new(config.effective_data_dir()));
        let delay = Duration::from_millis(config.effective_autosave_delay_ms());
        Self::load_with_store(store, delay).await
    }

    /// Load phase: gate the scheduler, read every slice concurrently, run
    /// the schema migrations, then open the gate. Collaborators only get
    /// state that has been fully loaded and migrated.
    pub async fn load_with_store(
        store: Arc<JsonSliceStore>,
        autosave_delay: Duration,
    ) -> RewordResult<Self> {
        let autosave =
            AutosaveScheduler::new(store.clone() as Arc<dyn SliceStore>, autosave_delay);
        autosave.suspend();

        let (
            entries,
            scenarios,
            page_widget_config,
            auto_translate,
            engines,
            dictionaries,
            anki_config,
            styles,
            original_text_config,
            interaction_config,
        ) = tokio::join!(
            store.get_slice::<Vec<reword_domain::WordEntry>>(),
            store.get_slice::<Vec<reword_domain::Scenario>>(),
            store.get_slice::<reword_domain::PageWidgetConfig>(),
            store.get_slice::<reword_domain::AutoTranslateConfig>(),
            store.get_slice::<Vec<reword_domain::TranslationEngine>>(),
            store.get_slice::<Vec<reword_domain::DictionaryEngine>>(),
            store.get_slice::<reword_domain::AnkiConfig>(),
            store.get_slice::<reword_domain::StyleMap>(),
            store.get_slice::<reword_domain::OriginalTextConfig>(),
            store.get_slice::<reword_domain::WordInteractionConfig>(),
        );

        let mut snapshot = AppSnapshot {
            entries,
            scenarios,
            page_widget_config,
            auto_translate,
            engines,
            dictionaries,
            anki_config,
            styles,
            original_text_config,
            interaction_config,
        };

        let outcome = Migrator::run(&*store, &mut snapshot).await;
        if outcome.any() {
            tracing::info!(
                "Schema migrations applied (dictionaries: {}, anki: {})",
                outcome.dictionaries_repaired,
                outcome.anki_repaired
            );
        }

        autosave.resume();
        tracing::info!("State loaded from {}", store.dir().display());

        Ok(Self {
            store,
            autosave,
            snapshot,
        })
    }

    /// Read access for collaborators. They never get their own storage
    /// handle; this reference is the working copy.
    pub fn state(&self) -> &AppSnapshot {
        &self.snapshot
    }

    /// The sole mutation path. Applies the closure to the owned snapshot and
    /// (re)schedules the debounced write-back with the post-mutation state.
    pub fn update(&mut self, mutate: impl FnOnce(&mut AppSnapshot)) {
        mutate(&mut self.snapshot);
        self.autosave.schedule(self.snapshot.clone());
    }

    /// Serialize the current state into a backup document. Fire-and-forget:
    /// no state or storage mutation.
    pub fn export_backup(&self) -> BackupDocument {
        BackupExporter::export(&self.snapshot)
    }

    /// Validate and restore an uploaded backup. Validation failures leave
    /// everything untouched; once validation passes, slices present in the
    /// document replace memory and storage while the autosave gate is held.
    pub async fn import_backup(&mut self, json: &str) -> RewordResult<usize> {
        let document = BackupImporter::parse(json)?;

        self.autosave.suspend();
        let result =
            BackupImporter::apply(document, &mut self.snapshot, &*self.store).await;
        self.autosave.resume();

        result
    }

    /// Write the current state out immediately, e.g. before shutdown.
    pub async fn flush(&self) {
        self.autosave.flush_now(&self.snapshot).await;
    }
}
