//! Application Session
//!
//! Single owner of the state shared between screens: the menu pipeline,
//! the preference store and the category selection. Screens get narrow
//! handles instead of reaching for globals.

use std::sync::{Arc, RwLock};

use crate::config::AppConfig;
use crate::domain::{Category, CategorySelection, MenuItem};
use crate::error::SessionError;
use crate::pipeline::MenuPipeline;
use crate::remote::{HttpMenuSource, RemoteSource};
use crate::repository::{
    init_db, FilterableRepository, MenuRepository, PreferenceStore, ProfileRepository,
    SqlitePreferenceStore,
};

const APP_NAME: &str = "LittleLemon";

/// Read/update access to the session's category selection
#[derive(Clone, Default)]
pub struct SelectionHandle {
    inner: Arc<RwLock<CategorySelection>>,
}

impl SelectionHandle {
    pub fn snapshot(&self) -> CategorySelection {
        self.inner.read().map(|s| s.clone()).unwrap_or_default()
    }

    /// Toggle `category`; returns whether it is selected afterwards
    pub fn toggle(&self, category: Category) -> bool {
        self.inner
            .write()
            .map(|mut s| s.toggle(category))
            .unwrap_or(false)
    }

    pub fn clear(&self) {
        if let Ok(mut s) = self.inner.write() {
            s.clear();
        }
    }
}

pub struct AppSession {
    config: AppConfig,
    pipeline: Arc<MenuPipeline>,
    prefs: Arc<dyn PreferenceStore>,
    profiles: ProfileRepository,
    selection: SelectionHandle,
}

impl AppSession {
    /// Open the database, start logging when a log directory is configured,
    /// and wire the HTTP menu source.
    pub async fn open(config: AppConfig) -> Result<Self, SessionError> {
        if let Some(dir) = &config.log_dir {
            match rolling_logger::init_logger(dir.clone(), APP_NAME) {
                Ok(path) => log::info!("Logging to {}", path.display()),
                Err(e) => eprintln!("Failed to init rolling logger: {}", e),
            }
        }

        let conn = init_db(&config.db_path).await.map_err(|e| {
            rolling_logger::error(&format!("DB init failed: {}", e));
            SessionError::Database(e)
        })?;
        let remote = HttpMenuSource::new(config.menu_url.clone(), config.http_timeout)
            .map_err(|e| SessionError::Http(e.to_string()))?;

        rolling_logger::info("Session opened");
        Ok(Self::with_parts(
            config,
            Arc::new(MenuRepository::new(conn.clone())),
            Arc::new(remote),
            Arc::new(SqlitePreferenceStore::new(conn)),
        ))
    }

    /// Assemble a session from explicit collaborators
    pub fn with_parts(
        config: AppConfig,
        menu: Arc<dyn FilterableRepository<MenuItem>>,
        remote: Arc<dyn RemoteSource>,
        prefs: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            config,
            pipeline: Arc::new(MenuPipeline::new(menu, remote)),
            profiles: ProfileRepository::new(prefs.clone()),
            prefs,
            selection: SelectionHandle::default(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &Arc<MenuPipeline> {
        &self.pipeline
    }

    pub fn prefs(&self) -> &dyn PreferenceStore {
        self.prefs.as_ref()
    }

    pub fn profiles(&self) -> &ProfileRepository {
        &self.profiles
    }

    pub fn selection(&self) -> SelectionHandle {
        self.selection.clone()
    }
}
