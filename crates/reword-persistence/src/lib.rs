pub mod autosave;
pub mod backup;
pub mod migration;
pub mod serialization;
pub mod store;
pub mod traits;

pub use autosave::{AutosaveScheduler, DEFAULT_QUIET_PERIOD};
pub use backup::{BackupDocument, BackupExporter, BackupImporter, BACKUP_FORMAT_VERSION};
pub use migration::{MigrationOutcome, Migrator};
pub use store::JsonSliceStore;
pub use traits::{SliceStore, SliceStoreExt};
