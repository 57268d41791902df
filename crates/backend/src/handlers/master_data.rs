use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::master_kind::{MasterKind, MasterKindInfo};
use contracts::shared::record_values::RecordValues;
use serde::Deserialize;
use serde_json::json;

use super::error::{api_validation_error, ApiError};
use crate::domain::master_data::service;
use crate::shared::data::db::get_connection;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub order_by: Option<String>,
}

fn body(payload: Result<Json<RecordValues>, JsonRejection>) -> Result<RecordValues, ApiError> {
    match payload {
        Ok(Json(values)) => Ok(values),
        Err(rejection) => Err(api_validation_error(&rejection.body_text())),
    }
}

/// GET /api/master
pub async fn list_kinds() -> Json<Vec<MasterKindInfo>> {
    Json(MasterKind::ALL.iter().map(MasterKind::info).collect())
}

/// GET /api/master/:table
pub async fn list_all(
    Path(table): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<RecordValues>>, ApiError> {
    let rows = service::list(get_connection(), &table, params.order_by.as_deref()).await?;
    Ok(Json(rows))
}

/// GET /api/master/:table/active
pub async fn list_active(Path(table): Path<String>) -> Result<Json<Vec<RecordValues>>, ApiError> {
    Ok(Json(service::list_active(get_connection(), &table).await?))
}

/// GET /api/master/:table/:id
pub async fn get_by_id(
    Path((table, id)): Path<(String, String)>,
) -> Result<Json<RecordValues>, ApiError> {
    Ok(Json(service::get_by_id(get_connection(), &table, &id).await?))
}

/// POST /api/master/:table
pub async fn create(
    Path(table): Path<String>,
    payload: Result<Json<RecordValues>, JsonRejection>,
) -> Result<(StatusCode, Json<RecordValues>), ApiError> {
    let values = body(payload)?;
    let row = service::create(get_connection(), &table, values).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/master/:table/:id
pub async fn update(
    Path((table, id)): Path<(String, String)>,
    payload: Result<Json<RecordValues>, JsonRejection>,
) -> Result<Json<RecordValues>, ApiError> {
    let values = body(payload)?;
    Ok(Json(service::update(get_connection(), &table, &id, values).await?))
}

/// DELETE /api/master/:table/:id
pub async fn delete(Path((table, id)): Path<(String, String)>) -> Result<StatusCode, ApiError> {
    service::delete(get_connection(), &table, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/master/:table/testdata
pub async fn insert_test_data(
    Path(table): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind = service::resolve(&table)?;
    let inserted = service::insert_test_data(get_connection(), kind).await?;
    Ok(Json(json!({ "inserted": inserted })))
}
