//! Common types and traits for all master-data kinds

pub mod master_fields;
pub mod master_record;
pub mod record_id;

// Re-exports
pub use master_fields::MasterFields;
pub use master_record::{MasterRecord, NewRecord};
pub use record_id::RecordId;
