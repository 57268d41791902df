use chrono::Utc;
use contracts::domain::master_kind::MasterKind;
use contracts::shared::column_schema::{ColumnDef, ColumnType};
use contracts::shared::record_values::RecordValues;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryResult, Statement};
use serde_json::{Number, Value};
use uuid::Uuid;

use super::validation::{bind_values, WriteMode};
use super::StorageError;

// Table and column names below only ever come from `MasterKind` schemas,
// never from the request, so interpolating them into SQL is safe.

fn select_list(columns: &[ColumnDef]) -> String {
    let mut names = vec!["id"];
    names.extend(columns.iter().map(|c| c.key.as_str()));
    names.extend(["created_at", "updated_at"]);
    names.join(", ")
}

fn stmt(sql: String, values: Vec<sea_orm::Value>) -> Statement {
    Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, values)
}

/// Decode one stored row using the column types of the kind
fn row_to_values(row: &QueryResult, columns: &[ColumnDef]) -> Result<RecordValues, StorageError> {
    let mut values = RecordValues::new();
    values.insert("id".into(), Value::String(row.try_get::<String>("", "id")?));

    for col in columns {
        let key = col.key.as_str();
        let value = match col.column_type {
            ColumnType::Text | ColumnType::Textarea => row
                .try_get::<Option<String>>("", key)?
                .map(Value::String)
                .unwrap_or(Value::Null),
            ColumnType::Number if col.integer => row
                .try_get::<Option<i64>>("", key)?
                .map(Value::from)
                .unwrap_or(Value::Null),
            ColumnType::Number => row
                .try_get::<Option<f64>>("", key)?
                .map(number_value)
                .unwrap_or(Value::Null),
            ColumnType::Boolean => row
                .try_get::<Option<bool>>("", key)?
                .map(Value::Bool)
                .unwrap_or(Value::Null),
        };
        values.insert(col.key.clone(), value);
    }

    for key in ["created_at", "updated_at"] {
        values.insert(key.into(), Value::String(row.try_get::<String>("", key)?));
    }
    Ok(values)
}

/// Whole floats are emitted as JSON integers (`1000000`, not `1000000.0`)
fn number_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// All rows of `kind` ordered by `order_by`, then `code`
pub async fn list(
    conn: &DatabaseConnection,
    kind: MasterKind,
    order_by: &str,
    active_only: bool,
) -> Result<Vec<RecordValues>, StorageError> {
    let columns = kind.columns();
    if !columns.iter().any(|c| c.key == order_by) {
        return Err(StorageError::Validation(format!(
            "Cannot order by unknown column '{}'",
            order_by
        )));
    }

    let filter = if active_only { " WHERE is_active = 1" } else { "" };
    let sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}, code",
        select_list(&columns),
        kind.table_name(),
        filter,
        order_by
    );

    let rows = conn.query_all(stmt(sql, vec![])).await?;
    rows.iter().map(|r| row_to_values(r, &columns)).collect()
}

pub async fn get_by_id(
    conn: &DatabaseConnection,
    kind: MasterKind,
    id: &str,
) -> Result<Option<RecordValues>, StorageError> {
    let columns = kind.columns();
    let sql = format!(
        "SELECT {} FROM {} WHERE id = ?",
        select_list(&columns),
        kind.table_name()
    );
    let row = conn.query_one(stmt(sql, vec![id.into()])).await?;
    row.map(|r| row_to_values(&r, &columns)).transpose()
}

pub async fn codes(conn: &DatabaseConnection, kind: MasterKind) -> Result<Vec<String>, StorageError> {
    let sql = format!("SELECT code FROM {}", kind.table_name());
    let rows = conn.query_all(stmt(sql, vec![])).await?;
    rows.iter()
        .map(|r| r.try_get::<String>("", "code").map_err(StorageError::from))
        .collect()
}

pub async fn count(conn: &DatabaseConnection, kind: MasterKind) -> Result<i64, StorageError> {
    let sql = format!("SELECT COUNT(*) AS cnt FROM {}", kind.table_name());
    let row = conn.query_one(stmt(sql, vec![])).await?;
    Ok(row
        .and_then(|r| r.try_get::<i64>("", "cnt").ok())
        .unwrap_or(0))
}

/// Insert a row; storage assigns `id`, `created_at` and `updated_at`
pub async fn insert(
    conn: &DatabaseConnection,
    kind: MasterKind,
    values: &RecordValues,
) -> Result<RecordValues, StorageError> {
    let binds = bind_values(&kind.columns(), values, WriteMode::Insert)?;

    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let mut names = vec!["id".to_string()];
    let mut params: Vec<sea_orm::Value> = vec![id.clone().into()];
    for (key, value) in binds {
        names.push(key);
        params.push(value);
    }
    names.extend(["created_at".to_string(), "updated_at".to_string()]);
    params.extend([now.clone().into(), now.into()]);

    let placeholders = vec!["?"; names.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        kind.table_name(),
        names.join(", "),
        placeholders
    );
    conn.execute(stmt(sql, params))
        .await
        .map_err(StorageError::classify)?;

    get_by_id(conn, kind, &id)
        .await?
        .ok_or_else(|| StorageError::NotFound(format!("Inserted row {} not found", id)))
}

/// Write the columns present in `values`; absent columns keep their value
pub async fn update(
    conn: &DatabaseConnection,
    kind: MasterKind,
    id: &str,
    values: &RecordValues,
) -> Result<RecordValues, StorageError> {
    let binds = bind_values(&kind.columns(), values, WriteMode::Update)?;

    let mut assignments = Vec::new();
    let mut params: Vec<sea_orm::Value> = Vec::new();
    for (key, value) in binds {
        assignments.push(format!("{} = ?", key));
        params.push(value);
    }
    assignments.push("updated_at = ?".to_string());
    params.push(Utc::now().to_rfc3339().into());
    params.push(id.into());

    let sql = format!(
        "UPDATE {} SET {} WHERE id = ?",
        kind.table_name(),
        assignments.join(", ")
    );
    let result = conn
        .execute(stmt(sql, params))
        .await
        .map_err(StorageError::classify)?;
    if result.rows_affected() == 0 {
        return Err(not_found(kind, id));
    }

    get_by_id(conn, kind, id)
        .await?
        .ok_or_else(|| not_found(kind, id))
}

/// Hard delete
pub async fn delete(
    conn: &DatabaseConnection,
    kind: MasterKind,
    id: &str,
) -> Result<(), StorageError> {
    let sql = format!("DELETE FROM {} WHERE id = ?", kind.table_name());
    let result = conn.execute(stmt(sql, vec![id.into()])).await?;
    if result.rows_affected() == 0 {
        return Err(not_found(kind, id));
    }
    Ok(())
}

fn not_found(kind: MasterKind, id: &str) -> StorageError {
    StorageError::NotFound(format!("{} {} not found", kind.info().element_name, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use serde_json::json;

    fn values(v: Value) -> RecordValues {
        v.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_defaults() {
        let conn = connect_in_memory().await;
        let row = insert(
            &conn,
            MasterKind::Country,
            &values(json!({"code": "in", "name": "India", "region": "Asia"})),
        )
        .await
        .unwrap();

        assert!(!row["id"].as_str().unwrap().is_empty());
        assert_eq!(row["sort_order"], json!(0));
        assert_eq!(row["is_active"], json!(true));
        assert_eq!(row["region"], json!("Asia"));
        assert_eq!(row["created_at"], row["updated_at"]);
    }

    #[tokio::test]
    async fn test_stored_sort_order_decodes_as_record() {
        use contracts::domain::a001_country::aggregate::Country;

        let conn = connect_in_memory().await;
        insert(
            &conn,
            MasterKind::Country,
            &values(json!({"code": "in", "name": "India", "sort_order": 3_000_000_000i64})),
        )
        .await
        .unwrap();

        let rows = list(&conn, MasterKind::Country, "sort_order", false).await.unwrap();
        assert_eq!(rows[0]["sort_order"], json!(3_000_000_000i64));
        let rec = Country::from_values(rows[0].clone()).unwrap();
        assert_eq!(rec.sort_order, 3_000_000_000);
    }

    #[tokio::test]
    async fn test_list_orders_by_sort_order_then_code() {
        let conn = connect_in_memory().await;
        for (code, order) in [("id", 2), ("in", 1), ("fr", 2), ("us", 0)] {
            insert(
                &conn,
                MasterKind::Country,
                &values(json!({"code": code, "name": code, "sort_order": order})),
            )
            .await
            .unwrap();
        }

        let rows = list(&conn, MasterKind::Country, "sort_order", false).await.unwrap();
        let codes: Vec<&str> = rows.iter().map(|r| r["code"].as_str().unwrap()).collect();
        assert_eq!(codes, vec!["us", "in", "fr", "id"]);
    }

    #[tokio::test]
    async fn test_list_active_only_and_unknown_order_column() {
        let conn = connect_in_memory().await;
        insert(&conn, MasterKind::Region, &values(json!({"code": "apac", "name": "APAC"})))
            .await
            .unwrap();
        insert(
            &conn,
            MasterKind::Region,
            &values(json!({"code": "old", "name": "Old", "is_active": false})),
        )
        .await
        .unwrap();

        assert_eq!(list(&conn, MasterKind::Region, "sort_order", false).await.unwrap().len(), 2);
        let active = list(&conn, MasterKind::Region, "sort_order", true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["code"], json!("apac"));

        let err = list(&conn, MasterKind::Region, "id; DROP TABLE regions", false)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[tokio::test]
    async fn test_duplicate_code_is_conflict() {
        let conn = connect_in_memory().await;
        let body = values(json!({"code": "in", "name": "India"}));
        insert(&conn, MasterKind::Country, &body).await.unwrap();

        let err = insert(&conn, MasterKind::Country, &body).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)), "{err:?}");
        assert_eq!(count(&conn, MasterKind::Country).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_is_partial_and_missing_row_not_found() {
        let conn = connect_in_memory().await;
        let row = insert(
            &conn,
            MasterKind::Country,
            &values(json!({"code": "in", "name": "India", "region": "Asia", "sort_order": 1})),
        )
        .await
        .unwrap();
        let id = row["id"].as_str().unwrap();

        let updated = update(&conn, MasterKind::Country, id, &values(json!({"name": "Republic of India"})))
            .await
            .unwrap();
        assert_eq!(updated["name"], json!("Republic of India"));
        assert_eq!(updated["code"], json!("in"));
        assert_eq!(updated["region"], json!("Asia"));
        assert_eq!(updated["sort_order"], json!(1));
        assert_eq!(updated["created_at"], row["created_at"]);

        let err = update(&conn, MasterKind::Country, "missing", &values(json!({"name": "X"})))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_is_final() {
        let conn = connect_in_memory().await;
        let row = insert(&conn, MasterKind::EventType, &values(json!({"code": "webinar", "name": "Webinar"})))
            .await
            .unwrap();
        let id = row["id"].as_str().unwrap();

        delete(&conn, MasterKind::EventType, id).await.unwrap();
        assert!(get_by_id(&conn, MasterKind::EventType, id).await.unwrap().is_none());
        assert!(matches!(
            delete(&conn, MasterKind::EventType, id).await.unwrap_err(),
            StorageError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_real_columns_roundtrip() {
        let conn = connect_in_memory().await;
        let row = insert(
            &conn,
            MasterKind::RevenueRange,
            &values(json!({"code": "r1", "label": "Up to 1M", "min_revenue": 0, "max_revenue": 1000000.5})),
        )
        .await
        .unwrap();
        assert_eq!(row["min_revenue"], json!(0));
        assert_eq!(row["max_revenue"], json!(1000000.5));
    }
}
