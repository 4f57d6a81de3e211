//! Shared fixtures for unit tests

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::domain::{MenuItem, NewMenuItem};
use crate::error::{MenuError, MenuResult};
use crate::remote::RemoteSource;
use crate::repository::{
    init_db, BulkRepository, FilterableRepository, MenuFilter, MenuRepository,
    SqlitePreferenceStore,
};
use crate::session::AppSession;

pub fn item(name: &str, category: &str, price: f64) -> NewMenuItem {
    NewMenuItem {
        name: name.to_string(),
        price,
        description: format!("{} description", name),
        image: format!("{}.jpg", name.to_lowercase().replace(' ', "_")),
        category: category.to_string(),
    }
}

pub fn greek_salad() -> NewMenuItem {
    NewMenuItem {
        name: "Greek Salad".to_string(),
        price: 12.99,
        description: "Fresh".to_string(),
        image: "greek.jpg".to_string(),
        category: "starters".to_string(),
    }
}

pub fn sample_menu() -> Vec<NewMenuItem> {
    vec![
        greek_salad(),
        item("Bruschetta", "starters", 7.99),
        item("Grilled Fish", "mains", 20.0),
        item("Pasta", "mains", 18.99),
        item("Lemon Dessert", "desserts", 6.99),
        item("Greek Lemonade", "drinks", 4.5),
    ]
}

pub async fn menu_store() -> Arc<MenuRepository> {
    let conn = init_db(Path::new(":memory:")).await.expect("Failed to init test DB");
    Arc::new(MenuRepository::new(conn))
}

/// Session over a fresh in-memory database
pub async fn test_session(remote: Arc<FakeRemote>) -> AppSession {
    let conn = init_db(Path::new(":memory:")).await.expect("Failed to init test DB");
    let config = AppConfig {
        db_path: ":memory:".into(),
        ..AppConfig::default()
    };
    AppSession::with_parts(
        config,
        Arc::new(MenuRepository::new(conn.clone())),
        remote,
        Arc::new(SqlitePreferenceStore::new(conn)),
    )
}

/// Remote source serving a fixed menu (or failing when none is set)
pub struct FakeRemote {
    menu: Mutex<Option<Vec<NewMenuItem>>>,
    calls: AtomicUsize,
    delay: Duration,
}

impl FakeRemote {
    pub fn serving(menu: Vec<NewMenuItem>) -> Self {
        Self {
            menu: Mutex::new(Some(menu)),
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn failing() -> Self {
        Self {
            menu: Mutex::new(None),
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn set_menu(&self, menu: Option<Vec<NewMenuItem>>) {
        *self.menu.lock().unwrap() = menu;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSource for FakeRemote {
    async fn fetch_menu(&self) -> MenuResult<Vec<NewMenuItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.menu
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| MenuError::RemoteFetchFailed("connection refused".to_string()))
    }
}

/// Menu store that counts the filter queries it answers
pub struct CountingStore {
    inner: Arc<MenuRepository>,
    filters: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: Arc<MenuRepository>) -> Self {
        Self {
            inner,
            filters: AtomicUsize::new(0),
        }
    }

    pub fn filter_calls(&self) -> usize {
        self.filters.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BulkRepository<MenuItem> for CountingStore {
    async fn list(&self) -> MenuResult<Vec<MenuItem>> {
        self.inner.list().await
    }

    async fn count(&self) -> MenuResult<usize> {
        self.inner.count().await
    }

    async fn insert_many(&self, drafts: &[NewMenuItem]) -> MenuResult<Vec<MenuItem>> {
        self.inner.insert_many(drafts).await
    }

    async fn clear(&self) -> MenuResult<()> {
        self.inner.clear().await
    }
}

#[async_trait]
impl FilterableRepository<MenuItem> for CountingStore {
    async fn filter(&self, filter: &MenuFilter) -> MenuResult<Vec<MenuItem>> {
        self.filters.fetch_add(1, Ordering::SeqCst);
        self.inner.filter(filter).await
    }
}
