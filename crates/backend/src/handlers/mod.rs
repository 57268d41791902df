pub mod error;
pub mod logs;
pub mod master_data;
