use thiserror::Error;

/// Errors seen at the boundary of a master-data resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MasterDataError {
    /// The collaborator rejected or failed the request; carries its message as-is
    #[error("{0}")]
    Collaborator(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    /// A row came back in a shape the kind cannot decode
    #[error("Unexpected record shape: {0}")]
    Decode(String),
}
