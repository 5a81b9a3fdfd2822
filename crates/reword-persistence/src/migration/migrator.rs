use reword_domain::AppSnapshot;

use crate::migration::{anki_defaults, dictionary_priority};
use crate::traits::{SliceStore, SliceStoreExt};

/// What the startup migration pass actually touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationOutcome {
    pub dictionaries_repaired: bool,
    pub anki_repaired: bool,
}

impl MigrationOutcome {
    pub fn any(&self) -> bool {
        self.dictionaries_repaired || self.anki_repaired
    }
}

/// Runs the structural detect-and-repair migrations once per load, before
/// any collaborator sees the snapshot.
pub struct Migrator;

impl Migrator {
    /// Repair the known-fragile slices in place and persist each one that
    /// changed. Slices that were already clean are not written back.
    ///
    /// A failed write-back is logged and not propagated: the repaired value
    /// lives in the snapshot, so the next autosave settle persists it.
    pub async fn run<S: SliceStore + ?Sized>(
        store: &S,
        snapshot: &mut AppSnapshot,
    ) -> MigrationOutcome {
        let dictionaries_repaired = dictionary_priority::repair(&mut snapshot.dictionaries);
        if dictionaries_repaired {
            tracing::info!("Migrated dictionary priorities (iciba to rank 1)");
            if let Err(e) = store.put_slice(&snapshot.dictionaries).await {
                tracing::error!("Failed to persist migrated dictionaries: {}", e);
            }
        }

        let anki_repaired = anki_defaults::repair(&mut snapshot.anki_config);
        if anki_repaired {
            tracing::info!("Migrated Anki config (filled missing deck-name fields)");
            if let Err(e) = store.put_slice(&snapshot.anki_config).await {
                tracing::error!("Failed to persist migrated Anki config: {}", e);
            }
        }

        MigrationOutcome {
            dictionaries_repaired,
            anki_repaired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockSliceStore;
    use reword_domain::builtin_dictionaries;

    #[tokio::test]
    async fn test_clean_snapshot_produces_zero_writes() {
        let mut store = MockSliceStore::new();
        store.expect_write_value().never();

        let mut snapshot = AppSnapshot::new();
        let outcome = Migrator::run(&store, &mut snapshot).await;

        assert!(!outcome.any());
        assert_eq!(snapshot, AppSnapshot::new());
    }

    #[tokio::test]
    async fn test_demoted_iciba_is_repaired_and_persisted() {
        let mut store = MockSliceStore::new();
        store
            .expect_write_value()
            .withf(|key, _| key == "dictionaries")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut snapshot = AppSnapshot::new();
        snapshot.dictionaries[0].priority = 7;

        let outcome = Migrator::run(&store, &mut snapshot).await;
        assert!(outcome.dictionaries_repaired);
        assert!(!outcome.anki_repaired);
        assert_eq!(snapshot.dictionaries[0].priority, 1);
    }

    #[tokio::test]
    async fn test_incomplete_anki_config_is_repaired_and_persisted() {
        let mut store = MockSliceStore::new();
        store
            .expect_write_value()
            .withf(|key, _| key == "ankiConfig")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut snapshot = AppSnapshot::new();
        snapshot.anki_config.deck_name_learning = None;
        snapshot.anki_config.legacy_deck_name = Some("Old Deck".to_string());

        let outcome = Migrator::run(&store, &mut snapshot).await;
        assert!(outcome.anki_repaired);
        assert_eq!(
            snapshot.anki_config.deck_name_learning.as_deref(),
            Some("Old Deck")
        );
    }

    #[tokio::test]
    async fn test_running_twice_matches_running_once() {
        let mut store = MockSliceStore::new();
        store.expect_write_value().returning(|_, _| Ok(()));

        let mut snapshot = AppSnapshot::new();
        snapshot.dictionaries[0].priority = 3;
        snapshot.anki_config.sync_scope = None;

        Migrator::run(&store, &mut snapshot).await;
        let once = snapshot.clone();
        let second = Migrator::run(&store, &mut snapshot).await;

        assert!(!second.any());
        assert_eq!(snapshot, once);
        assert_eq!(snapshot.dictionaries, builtin_dictionaries());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_repaired_value_in_memory() {
        let mut store = MockSliceStore::new();
        store.expect_write_value().returning(|_, _| {
            Err(reword_core::RewordError::Internal("disk full".to_string()))
        });

        let mut snapshot = AppSnapshot::new();
        snapshot.dictionaries[0].priority = 7;

        let outcome = Migrator::run(&store, &mut snapshot).await;
        assert!(outcome.dictionaries_repaired);
        assert_eq!(snapshot.dictionaries[0].priority, 1);
    }
}
