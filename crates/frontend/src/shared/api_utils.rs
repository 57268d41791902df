//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and reading error bodies.

use contracts::shared::error_response::ErrorResponse;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Message to show for a non-2xx response.
///
/// Uses `ErrorResponse.message` when the body has that shape, the raw body
/// otherwise, and the status code when the body is empty.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ErrorResponse>(body) {
        return err.message;
    }
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(
                409,
                r#"{"code":"conflict","message":"UNIQUE constraint failed: countries.code"}"#
            ),
            "UNIQUE constraint failed: countries.code"
        );
        assert_eq!(error_message(502, "Bad gateway\n"), "Bad gateway");
        assert_eq!(error_message(500, ""), "HTTP 500");
    }
}
