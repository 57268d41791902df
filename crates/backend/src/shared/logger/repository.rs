use chrono::Utc;
use contracts::shared::logger::LogEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::try_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "system_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: String,
    pub source: String,
    pub category: String,
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(m: Model) -> Self {
        LogEntry {
            id: m.id,
            timestamp: m.timestamp,
            source: m.source,
            category: m.category,
            message: m.message,
        }
    }
}

/// Fire-and-forget insert on the global connection.
///
/// Before the database is initialized the event only goes to tracing.
pub fn log_event_internal(source: &str, category: &str, message: &str) {
    tracing::info!(target: "system_log", source, category, "{}", message);

    let Some(conn) = try_connection() else {
        return;
    };
    let source = source.to_string();
    let category = category.to_string();
    let message = message.to_string();

    tokio::spawn(async move {
        if let Err(e) = log_event(conn, &source, &category, &message).await {
            tracing::error!("Failed to log event: {}", e);
        }
    });
}

pub async fn log_event(
    conn: &DatabaseConnection,
    source: &str,
    category: &str,
    message: &str,
) -> anyhow::Result<()> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        timestamp: Set(now),
        source: Set(source.to_string()),
        category: Set(category.to_string()),
        message: Set(message.to_string()),
    };

    active.insert(conn).await?;
    Ok(())
}

/// All entries, newest first
pub async fn get_all_logs(conn: &DatabaseConnection) -> anyhow::Result<Vec<LogEntry>> {
    let logs: Vec<LogEntry> = Entity::find()
        .order_by_desc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(logs)
}

pub async fn clear_all_logs(conn: &DatabaseConnection) -> anyhow::Result<()> {
    Entity::delete_many().exec(conn).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    #[tokio::test]
    async fn test_log_roundtrip_newest_first() {
        let conn = connect_in_memory().await;
        log_event(&conn, "server", "startup", "first").await.unwrap();
        log_event(&conn, "server", "master_data", "second").await.unwrap();

        let logs = get_all_logs(&conn).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "second");
        assert_eq!(logs[1].category, "startup");

        clear_all_logs(&conn).await.unwrap();
        assert!(get_all_logs(&conn).await.unwrap().is_empty());
    }
}
