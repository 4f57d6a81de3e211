//! Database Connection and Setup
//!
//! Opens the SQLite database shared by the menu cache and the preference
//! store, and creates their tables.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Connection handle shared by all repositories
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Open (or create) the database at `db_path` and run migrations.
///
/// `:memory:` opens a private in-memory database.
pub async fn init_db(db_path: &Path) -> Result<SharedConnection, String> {
    let conn = if db_path.as_os_str() == ":memory:" {
        Connection::open_in_memory()
    } else {
        Connection::open(db_path)
    }
    .map_err(|e| format!("Failed to open db: {}", e))?;

    run_migrations(&conn)?;

    Ok(Arc::new(Mutex::new(conn)))
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS menu (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            price REAL,
            description TEXT,
            image TEXT,
            category TEXT
        )",
        [],
    )
    .map_err(|e| format!("Failed to create menu table: {}", e))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| format!("Failed to create preferences table: {}", e))?;

    log::info!("Database tables ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_names(conn: &SharedConnection) -> Vec<String> {
        let conn = conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_init_creates_tables() {
        let conn = init_db(Path::new(":memory:")).await.unwrap();
        let names = table_names(&conn).await;
        assert!(names.contains(&"menu".to_string()));
        assert!(names.contains(&"preferences".to_string()));
    }

    #[tokio::test]
    async fn test_reopen_on_disk_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.db");

        {
            let conn = init_db(&path).await.unwrap();
            conn.lock()
                .await
                .execute("INSERT INTO menu (name) VALUES ('Bruschetta')", [])
                .unwrap();
        }

        let conn = init_db(&path).await.unwrap();
        let count: i64 = conn
            .lock()
            .await
            .query_row("SELECT COUNT(*) FROM menu", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
