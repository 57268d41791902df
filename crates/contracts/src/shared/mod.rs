pub mod column_schema;
pub mod error_response;
pub mod logger;
pub mod master_data;
pub mod record_values;
