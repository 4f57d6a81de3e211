//! Menu Pipeline
//!
//! Serves the menu from the local store, pulling it from the remote source
//! the first time the store is found empty, and answers filtered views
//! straight from the store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;

use crate::domain::{CategorySelection, MenuItem};
use crate::error::{MenuError, MenuResult};
use crate::remote::RemoteSource;
use crate::repository::{FilterableRepository, MenuFilter};

/// Where the pipeline stands within the current app session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// Nothing loaded yet, or the store was reset
    #[default]
    Uninitialized,
    /// The store holds the full menu
    Populated,
    /// Population failed; the next `initialize` fetches again
    Empty,
}

/// Outcome of the latest population attempt. Held locked for the whole
/// fetch-and-persist so concurrent `initialize` calls share a single fetch.
#[derive(Default)]
struct PopulateSlot {
    last_error: Option<MenuError>,
}

pub struct MenuPipeline {
    store: Arc<dyn FilterableRepository<MenuItem>>,
    remote: Arc<dyn RemoteSource>,
    state: StdMutex<PipelineState>,
    /// Completed population attempts; only bumped while `populate` is held
    attempts: AtomicU64,
    populate: Mutex<PopulateSlot>,
}

impl MenuPipeline {
    pub fn new(store: Arc<dyn FilterableRepository<MenuItem>>, remote: Arc<dyn RemoteSource>) -> Self {
        Self {
            store,
            remote,
            state: StdMutex::new(PipelineState::Uninitialized),
            attempts: AtomicU64::new(0),
            populate: Mutex::new(PopulateSlot::default()),
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state.lock().map(|s| *s).unwrap_or_default()
    }

    fn set_state(&self, next: PipelineState) {
        if let Ok(mut state) = self.state.lock() {
            *state = next;
        }
    }

    /// Return the cached menu, populating the store from the remote source
    /// when it is empty.
    ///
    /// Callers that arrive while another call is populating wait for it and
    /// get its outcome instead of fetching again.
    pub async fn initialize(&self) -> MenuResult<Vec<MenuItem>> {
        let observed = self.attempts.load(Ordering::SeqCst);

        let cached = self.store.list().await?;
        if !cached.is_empty() {
            log::debug!("Serving {} menu items from local store", cached.len());
            self.set_state(PipelineState::Populated);
            return Ok(cached);
        }

        let mut slot = self.populate.lock().await;
        if self.attempts.load(Ordering::SeqCst) != observed {
            if let Some(err) = slot.last_error.clone() {
                return Err(err);
            }
            let rows = self.store.list().await?;
            if !rows.is_empty() {
                self.set_state(PipelineState::Populated);
            }
            return Ok(rows);
        }

        let outcome = self.populate_from_remote().await;
        slot.last_error = outcome.as_ref().err().cloned();
        self.attempts.fetch_add(1, Ordering::SeqCst);

        match &outcome {
            Ok(rows) if !rows.is_empty() => self.set_state(PipelineState::Populated),
            Ok(_) => self.set_state(PipelineState::Empty),
            Err(e) => {
                log::warn!("Menu initialization failed: {}", e);
                self.set_state(PipelineState::Empty);
            }
        }
        outcome
    }

    async fn populate_from_remote(&self) -> MenuResult<Vec<MenuItem>> {
        log::info!("Local menu is empty, fetching from server");
        let fetched = self.remote.fetch_menu().await?;
        self.store.insert_many(&fetched).await
    }

    /// Rows whose category is any of `categories` (or any row when empty)
    /// and whose name contains `search_term` (or any name when empty)
    pub async fn query(
        &self,
        categories: &CategorySelection,
        search_term: &str,
    ) -> MenuResult<Vec<MenuItem>> {
        self.query_filter(&MenuFilter::from_selection(categories, search_term))
            .await
    }

    pub async fn query_filter(&self, filter: &MenuFilter) -> MenuResult<Vec<MenuItem>> {
        self.store.filter(filter).await
    }

    /// Delete every cached row. The next `initialize` fetches again.
    pub async fn reset(&self) -> MenuResult<()> {
        self.store.clear().await?;
        self.set_state(PipelineState::Uninitialized);
        Ok(())
    }
}
