//! Checks a JSON body against the column schema of a kind and converts it
//! into bind values for SQLite.

use contracts::shared::column_schema::{ColumnDef, ColumnType};
use contracts::shared::record_values::RecordValues;
use sea_orm::Value as DbValue;
use serde_json::Value;

use super::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Every required column must be present
    Insert,
    /// Only the columns present are written
    Update,
}

/// Validated `(column key, bind value)` pairs in schema order
pub fn bind_values(
    columns: &[ColumnDef],
    values: &RecordValues,
    mode: WriteMode,
) -> Result<Vec<(String, DbValue)>, StorageError> {
    if let Some(unknown) = values.keys().find(|k| !columns.iter().any(|c| &c.key == *k)) {
        return Err(StorageError::Validation(format!("Unknown column '{}'", unknown)));
    }

    let mut binds = Vec::new();
    for col in columns {
        match values.get(&col.key) {
            Some(value) => binds.push((col.key.clone(), to_db_value(col, value)?)),
            None if mode == WriteMode::Insert && col.required => {
                return Err(required(col));
            }
            None => {}
        }
    }
    Ok(binds)
}

fn required(col: &ColumnDef) -> StorageError {
    StorageError::Validation(format!("'{}' is required", col.label))
}

fn invalid(col: &ColumnDef, expected: &str) -> StorageError {
    StorageError::Validation(format!("'{}' must be {}", col.label, expected))
}

pub fn to_db_value(col: &ColumnDef, value: &Value) -> Result<DbValue, StorageError> {
    if value.is_null() {
        if col.required {
            return Err(required(col));
        }
        return Ok(null_of(col));
    }

    match col.column_type {
        ColumnType::Text | ColumnType::Textarea => match value {
            Value::String(s) if col.required && s.trim().is_empty() => Err(required(col)),
            Value::String(s) => Ok(DbValue::String(Some(Box::new(s.clone())))),
            _ => Err(invalid(col, "text")),
        },
        ColumnType::Number if col.integer => {
            let n = value
                .as_i64()
                .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .ok_or_else(|| invalid(col, "a whole number"))?;
            Ok(DbValue::BigInt(Some(n)))
        }
        ColumnType::Number => value
            .as_f64()
            .map(|f| DbValue::Double(Some(f)))
            .ok_or_else(|| invalid(col, "a number")),
        ColumnType::Boolean => value
            .as_bool()
            .map(|b| DbValue::Bool(Some(b)))
            .ok_or_else(|| invalid(col, "true or false")),
    }
}

fn null_of(col: &ColumnDef) -> DbValue {
    match col.column_type {
        ColumnType::Text | ColumnType::Textarea => DbValue::String(None),
        ColumnType::Number if col.integer => DbValue::BigInt(None),
        ColumnType::Number => DbValue::Double(None),
        ColumnType::Boolean => DbValue::Bool(None),
    }
}
