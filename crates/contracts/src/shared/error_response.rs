use serde::{Deserialize, Serialize};

/// JSON body of every non-2xx API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine code, e.g. `not_found`, `conflict`, `validation_error`
    pub code: String,
    /// Human-readable message, shown to the user as-is
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}
