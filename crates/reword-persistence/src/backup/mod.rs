pub mod document;
pub mod exporter;
pub mod importer;

pub use document::{BackupDocument, APP_LABEL, BACKUP_FORMAT_VERSION};
pub use exporter::BackupExporter;
pub use importer::BackupImporter;
