//! Repository layer for persisted records.
//!
//! Repositories move raw JSON documents in and out of storage:
//! - Settings, custom levels, and generation history each own one record
//! - Decoding, validation, and recovery from malformed data happen in the
//!   stores built on top (see [`crate::stores`])

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileRecordRepository;
pub use memory::InMemoryRecordRepository;
pub use traits::{RecordKey, RecordRepository};
