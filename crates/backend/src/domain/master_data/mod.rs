pub mod error;
pub mod repository;
pub mod seed;
pub mod service;
pub mod validation;

pub use error::StorageError;
