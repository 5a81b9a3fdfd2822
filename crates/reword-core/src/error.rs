use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to write slice '{slice}': {reason}")]
    StorageWrite { slice: String, reason: String },

    #[error("Invalid backup document: {0}")]
    BackupFormat(String),

    #[error("Backup restore incomplete: {0}")]
    BackupWrite(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
