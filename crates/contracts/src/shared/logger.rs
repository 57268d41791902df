use serde::{Deserialize, Serialize};

/// System log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    pub source: String, // "client" or "server"
    pub category: String,
    pub message: String,
}
