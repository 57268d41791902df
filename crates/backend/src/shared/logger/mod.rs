pub mod repository;

use repository::log_event_internal;

/// Record a server-side event in the system log
///
/// # Examples
/// ```ignore
/// logger::log("startup", "Server started");
/// logger::log("master_data", "countries: created 'in'");
/// ```
pub fn log(category: &str, message: &str) {
    log_event_internal("server", category, message);
}
