//! In-memory repository implementations for testing and development.

mod record;

pub use record::InMemoryRecordRepository;
