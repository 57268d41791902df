//! In-memory collaborator and notifier used by the resource tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use super::client::TableClient;
use crate::domain::common::RecordId;
use super::error::MasterDataError;
use super::notify::{Notification, Notifier};
use crate::shared::record_values::RecordValues;

#[derive(Default)]
struct State {
    tables: HashMap<String, Vec<RecordValues>>,
    select_calls: usize,
    fail_select: Option<String>,
}

/// Table storage with a UNIQUE(code) constraint per table
#[derive(Clone, Default)]
pub struct MemoryTableClient {
    state: Arc<Mutex<State>>,
}

impl MemoryTableClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row directly, bypassing the client interface
    pub fn seed(&self, table: &str, mut values: RecordValues) {
        values.insert("id".into(), Value::String(RecordId::new_v4().0));
        self.state
            .lock()
            .unwrap()
            .tables
            .entry(table.to_string())
            .or_default()
            .push(values);
    }

    pub fn select_calls(&self) -> usize {
        self.state.lock().unwrap().select_calls
    }

    pub fn fail_next_select(&self, message: &str) {
        self.state.lock().unwrap().fail_select = Some(message.to_string());
    }
}

fn duplicate_code(rows: &[RecordValues], code: Option<&Value>, except_id: Option<&str>) -> bool {
    let Some(code) = code else {
        return false;
    };
    rows.iter().any(|r| {
        r.get("code") == Some(code)
            && except_id.map_or(true, |id| r.get("id").and_then(Value::as_str) != Some(id))
    })
}

fn not_found(id: &str) -> MasterDataError {
    MasterDataError::NotFound(format!("row {} does not exist", id))
}

#[async_trait(?Send)]
impl TableClient for MemoryTableClient {
    async fn select_ordered(
        &self,
        table: &str,
        order_by: &str,
    ) -> Result<Vec<RecordValues>, MasterDataError> {
        let mut state = self.state.lock().unwrap();
        state.select_calls += 1;
        if let Some(message) = state.fail_select.take() {
            return Err(MasterDataError::Collaborator(message));
        }
        let mut rows = state.tables.get(table).cloned().unwrap_or_default();
        rows.sort_by_key(|r| r.get(order_by).and_then(Value::as_i64).unwrap_or(0));
        Ok(rows)
    }

    async fn insert(
        &self,
        table: &str,
        mut values: RecordValues,
    ) -> Result<RecordValues, MasterDataError> {
        let mut state = self.state.lock().unwrap();
        let rows = state.tables.entry(table.to_string()).or_default();
        if duplicate_code(rows, values.get("code"), None) {
            return Err(MasterDataError::Collaborator(format!(
                "duplicate key value violates unique constraint \"{}_code_key\"",
                table
            )));
        }
        let now = Value::String(Utc::now().to_rfc3339());
        values.insert("id".into(), Value::String(RecordId::new_v4().0));
        values.insert("created_at".into(), now.clone());
        values.insert("updated_at".into(), now);
        rows.push(values.clone());
        Ok(values)
    }

    async fn update(
        &self,
        table: &str,
        id: &str,
        values: RecordValues,
    ) -> Result<RecordValues, MasterDataError> {
        let mut state = self.state.lock().unwrap();
        let rows = state.tables.entry(table.to_string()).or_default();
        if duplicate_code(rows, values.get("code"), Some(id)) {
            return Err(MasterDataError::Collaborator(format!(
                "duplicate key value violates unique constraint \"{}_code_key\"",
                table
            )));
        }
        let row = rows
            .iter_mut()
            .find(|r| r.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| not_found(id))?;
        row.extend(values);
        row.insert("updated_at".into(), Value::String(Utc::now().to_rfc3339()));
        Ok(row.clone())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), MasterDataError> {
        let mut state = self.state.lock().unwrap();
        let rows = state.tables.entry(table.to_string()).or_default();
        let before = rows.len();
        rows.retain(|r| r.get("id").and_then(Value::as_str) != Some(id));
        if rows.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}
