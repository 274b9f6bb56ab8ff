//! Persisted record layout and map document I/O

pub mod records;

pub use records::{LocationRecord, MapDocument, MapSettings, StorageError};
