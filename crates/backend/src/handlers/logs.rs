use axum::http::StatusCode;
use axum::Json;
use contracts::shared::logger::LogEntry;

use super::error::ApiError;
use crate::shared::data::db::get_connection;
use crate::shared::logger;

/// GET /api/logs
pub async fn list_all() -> Result<Json<Vec<LogEntry>>, ApiError> {
    Ok(Json(logger::repository::get_all_logs(get_connection()).await?))
}

/// DELETE /api/logs
pub async fn clear_all() -> Result<StatusCode, ApiError> {
    logger::repository::clear_all_logs(get_connection()).await?;
    Ok(StatusCode::NO_CONTENT)
}
