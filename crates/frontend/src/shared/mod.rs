pub mod api_utils;
pub mod components;
pub mod master_data;
