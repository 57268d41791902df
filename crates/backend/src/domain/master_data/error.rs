use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure of a master-data storage operation, classified for the HTTP layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unknown master-data table '{0}'")]
    UnknownTable(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl StorageError {
    /// Turn constraint violations reported by SQLite into client errors
    pub fn classify(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::Conflict(message),
            _ => {
                let message = err.to_string();
                if message.contains("NOT NULL constraint failed") {
                    Self::Validation(message)
                } else {
                    Self::Db(err)
                }
            }
        }
    }
}
