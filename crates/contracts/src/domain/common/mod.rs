//! Common types and traits for all records

pub mod record;
pub mod record_id;

// Re-exports
pub use record::Record;
pub use record_id::{next_record_id, numeric_suffix};
