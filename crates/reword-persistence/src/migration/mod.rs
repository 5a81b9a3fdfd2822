pub mod anki_defaults;
pub mod dictionary_priority;
pub mod migrator;

pub use migrator::{MigrationOutcome, Migrator};
