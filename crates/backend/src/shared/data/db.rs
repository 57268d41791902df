use once_cell::sync::OnceCell;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sqlx::sqlite::SqlitePool;
use std::path::Path;

use super::migration_runner;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Open the database file, apply migrations and publish the connection
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };

    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database: {}", absolute_path.display());

    let pool = SqlitePool::connect(&db_url).await?;
    migration_runner::run_migrations(&pool).await?;
    pool.close().await;

    let mut options = ConnectOptions::new(db_url);
    options.sqlx_logging(false);
    let conn = Database::connect(options).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Connection if `initialize_database` has completed
pub fn try_connection() -> Option<&'static DatabaseConnection> {
    DB_CONN.get()
}

/// Fresh migrated in-memory database; a single pooled connection keeps
/// every query on the same memory file.
#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    migration_runner::run_migrations(&pool).await.unwrap();
    sea_orm::SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url() {
        assert_eq!(
            build_sqlite_url(Path::new("/data/app.db")),
            "sqlite:///data/app.db?mode=rwc"
        );
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\app.db")),
            "sqlite:///C:/data/app.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn test_in_memory_connection_has_schema() {
        use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

        let conn = connect_in_memory().await;
        let row = conn
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(1) AS n FROM sqlite_master WHERE type='table' AND name='countries'",
            ))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.try_get::<i64>("", "n").unwrap(), 1);
    }
}
