use contracts::domain::master_kind::MasterKind;
use contracts::shared::master_data::SORT_KEY;
use contracts::shared::record_values::{strip_server_fields, RecordValues};
use sea_orm::DatabaseConnection;

use super::{repository, seed, StorageError};
use crate::shared::logger;

pub fn resolve(table: &str) -> Result<MasterKind, StorageError> {
    MasterKind::from_table(table).ok_or_else(|| StorageError::UnknownTable(table.to_string()))
}

pub async fn list(
    conn: &DatabaseConnection,
    table: &str,
    order_by: Option<&str>,
) -> Result<Vec<RecordValues>, StorageError> {
    let kind = resolve(table)?;
    repository::list(conn, kind, order_by.unwrap_or(SORT_KEY), false).await
}

/// Rows shown to consuming screens
pub async fn list_active(
    conn: &DatabaseConnection,
    table: &str,
) -> Result<Vec<RecordValues>, StorageError> {
    let kind = resolve(table)?;
    repository::list(conn, kind, SORT_KEY, true).await
}

pub async fn get_by_id(
    conn: &DatabaseConnection,
    table: &str,
    id: &str,
) -> Result<RecordValues, StorageError> {
    let kind = resolve(table)?;
    repository::get_by_id(conn, kind, id)
        .await?
        .ok_or_else(|| StorageError::NotFound(format!("{} {} not found", kind.info().element_name, id)))
}

/// Storage-owned keys in the body are ignored
pub async fn create(
    conn: &DatabaseConnection,
    table: &str,
    values: RecordValues,
) -> Result<RecordValues, StorageError> {
    let kind = resolve(table)?;
    let row = repository::insert(conn, kind, &strip_server_fields(values)).await?;
    let code = row.get("code").and_then(|c| c.as_str()).unwrap_or_default();
    logger::log("master_data", &format!("{}: created '{}'", table, code));
    Ok(row)
}

pub async fn update(
    conn: &DatabaseConnection,
    table: &str,
    id: &str,
    values: RecordValues,
) -> Result<RecordValues, StorageError> {
    let kind = resolve(table)?;
    let row = repository::update(conn, kind, id, &strip_server_fields(values)).await?;
    logger::log("master_data", &format!("{}: updated {}", table, id));
    Ok(row)
}

pub async fn delete(conn: &DatabaseConnection, table: &str, id: &str) -> Result<(), StorageError> {
    let kind = resolve(table)?;
    repository::delete(conn, kind, id).await?;
    logger::log("master_data", &format!("{}: deleted {}", table, id));
    Ok(())
}

/// Insert the demo rows of `kind` whose code is not taken yet.
///
/// Returns the number of inserted rows.
pub async fn insert_test_data(conn: &DatabaseConnection, kind: MasterKind) -> Result<usize, StorageError> {
    let existing = repository::codes(conn, kind).await?;
    let mut inserted = 0;
    for row in seed::test_rows(kind) {
        let taken = row
            .get("code")
            .and_then(|c| c.as_str())
            .map_or(false, |c| existing.iter().any(|e| e == c));
        if taken {
            continue;
        }
        repository::insert(conn, kind, &row).await?;
        inserted += 1;
    }
    if inserted > 0 {
        logger::log(
            "master_data",
            &format!("{}: inserted {} test rows", kind.table_name(), inserted),
        );
    }
    Ok(inserted)
}

/// Seed every master-data table that has no rows
pub async fn seed_empty_tables(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for kind in MasterKind::ALL {
        if repository::count(conn, kind).await? == 0 {
            let n = insert_test_data(conn, kind).await?;
            tracing::info!("Seeded {} with {} rows", kind.table_name(), n);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use serde_json::{json, Value};

    fn values(v: Value) -> RecordValues {
        v.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_unknown_table() {
        let conn = connect_in_memory().await;
        let err = list(&conn, "users", None).await.unwrap_err();
        assert!(matches!(err, StorageError::UnknownTable(t) if t == "users"));
    }

    #[tokio::test]
    async fn test_create_ignores_server_fields() {
        let conn = connect_in_memory().await;
        let row = create(
            &conn,
            "countries",
            values(json!({
                "id": "client-id",
                "created_at": "1999-01-01T00:00:00Z",
                "code": "in",
                "name": "India"
            })),
        )
        .await
        .unwrap();
        assert_ne!(row["id"], json!("client-id"));
        assert_ne!(row["created_at"], json!("1999-01-01T00:00:00Z"));
    }

    #[tokio::test]
    async fn test_country_scenario() {
        let conn = connect_in_memory().await;
        let india = create(
            &conn,
            "countries",
            values(json!({"code": "in", "name": "India", "region": "Asia", "sort_order": 1, "is_active": true})),
        )
        .await
        .unwrap();
        create(
            &conn,
            "countries",
            values(json!({"code": "id", "name": "Indonesia", "region": "Asia", "sort_order": 2})),
        )
        .await
        .unwrap();

        let id = india["id"].as_str().unwrap();
        update(&conn, "countries", id, values(json!({"name": "Bharat"})))
            .await
            .unwrap();

        let rows = list(&conn, "countries", None).await.unwrap();
        assert_eq!(rows[0]["name"], json!("Bharat"));
        assert_eq!(rows[0]["code"], json!("in"));
        assert_eq!(rows[1]["name"], json!("Indonesia"));

        // Duplicate code leaves the table unchanged
        let err = create(&conn, "countries", values(json!({"code": "in", "name": "Again"})))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
        assert_eq!(list(&conn, "countries", None).await.unwrap().len(), 2);

        delete(&conn, "countries", id).await.unwrap();
        let rows = list_active(&conn, "countries").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(matches!(
            get_by_id(&conn, "countries", id).await.unwrap_err(),
            StorageError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_insert_test_data_skips_existing_codes() {
        let conn = connect_in_memory().await;
        create(&conn, "event_types", values(json!({"code": "webinar", "name": "Our webinar"})))
            .await
            .unwrap();

        let total = seed::test_rows(MasterKind::EventType).len();
        let inserted = insert_test_data(&conn, MasterKind::EventType).await.unwrap();
        assert_eq!(inserted, total - 1);
        assert_eq!(insert_test_data(&conn, MasterKind::EventType).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_empty_tables_fills_every_kind() {
        let conn = connect_in_memory().await;
        seed_empty_tables(&conn).await.unwrap();
        for kind in MasterKind::ALL {
            assert_eq!(
                repository::count(&conn, kind).await.unwrap() as usize,
                seed::test_rows(kind).len()
            );
        }
    }
}
