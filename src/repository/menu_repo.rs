//! Menu Repository Implementation
//!
//! SQLite-backed local store for the cached menu.

use async_trait::async_trait;
use rusqlite::{params, params_from_iter, Row};

use crate::domain::{MenuItem, NewMenuItem};
use crate::error::{MenuError, MenuResult};
use super::db::SharedConnection;
use super::menu_filter::MenuFilter;
use super::traits::{BulkRepository, FilterableRepository};

/// SQLite implementation of the menu store
pub struct MenuRepository {
    conn: SharedConnection,
}

impl MenuRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn query_err(e: rusqlite::Error) -> MenuError {
    log::error!("Error querying menu: {}", e);
    MenuError::QueryFailed(e.to_string())
}

fn write_err(e: rusqlite::Error) -> MenuError {
    log::error!("Error writing menu: {}", e);
    MenuError::StoreWriteFailed(e.to_string())
}

fn row_to_menu_item(row: &Row<'_>) -> rusqlite::Result<MenuItem> {
    Ok(MenuItem {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        price: row.get::<_, Option<f64>>(2)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        image: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}

#[async_trait]
impl BulkRepository<MenuItem> for MenuRepository {
    async fn list(&self) -> MenuResult<Vec<MenuItem>> {
        self.filter(&MenuFilter::all()).await
    }

    async fn count(&self) -> MenuResult<usize> {
        let conn = self.conn.lock().await;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM menu", [], |row| row.get(0))
            .map_err(query_err)?;
        Ok(count as usize)
    }

    async fn insert_many(&self, drafts: &[NewMenuItem]) -> MenuResult<Vec<MenuItem>> {
        let mut conn = self.conn.lock().await;

        // One transaction: readers never see a half-populated menu
        let tx = conn.transaction().map_err(write_err)?;
        let mut saved = Vec::with_capacity(drafts.len());
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO menu (name, description, price, category, image) VALUES (?, ?, ?, ?, ?)",
                )
                .map_err(write_err)?;

            for item in drafts {
                stmt.execute(params![
                    item.name,
                    item.description,
                    item.price,
                    item.category,
                    item.image
                ])
                .map_err(write_err)?;
                saved.push(MenuItem::from_new(tx.last_insert_rowid(), item));
            }
        }
        tx.commit().map_err(write_err)?;

        log::info!("Saved {} menu items", saved.len());
        Ok(saved)
    }

    async fn clear(&self) -> MenuResult<()> {
        let conn = self.conn.lock().await;
        let removed = conn.execute("DELETE FROM menu", []).map_err(write_err)?;
        log::info!("Cleared {} rows from menu table", removed);
        Ok(())
    }
}

#[async_trait]
impl FilterableRepository<MenuItem> for MenuRepository {
    async fn filter(&self, filter: &MenuFilter) -> MenuResult<Vec<MenuItem>> {
        let (sql, params) = filter.to_sql();
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(&sql).map_err(query_err)?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), row_to_menu_item)
            .map_err(query_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(query_err)
    }
}
