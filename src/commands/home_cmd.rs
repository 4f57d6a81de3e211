//! Home Screen
//!
//! Menu browsing: loads the cached menu, keeps the category chips and the
//! search box, and delivers debounced filter results.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::debounce::{FilterDebouncer, FilterOutcome, FilterRequest};
use crate::domain::{Category, MenuItem, Profile};
use crate::error::{MenuResult, PrefsResult};
use crate::pipeline::MenuPipeline;
use crate::repository::ProfileRepository;
use crate::session::{AppSession, SelectionHandle};

pub struct HomeScreen {
    pipeline: Arc<MenuPipeline>,
    profiles: ProfileRepository,
    selection: SelectionHandle,
    image_base_url: String,
    search_term: String,
    debouncer: FilterDebouncer,
    outcomes: mpsc::UnboundedReceiver<FilterOutcome>,
}

impl HomeScreen {
    pub fn open(session: &AppSession) -> Self {
        let (debouncer, outcomes) =
            FilterDebouncer::new(session.pipeline().clone(), session.config().debounce);
        Self {
            pipeline: session.pipeline().clone(),
            profiles: session.profiles().clone(),
            selection: session.selection(),
            image_base_url: session.config().image_base_url.clone(),
            search_term: String::new(),
            debouncer,
            outcomes,
        }
    }

    /// Menu to show when the screen gains focus
    pub async fn load(&self) -> MenuResult<Vec<MenuItem>> {
        self.pipeline.initialize().await
    }

    /// Profile shown in the header (avatar or initials)
    pub async fn load_header(&self) -> PrefsResult<Profile> {
        self.profiles.load().await
    }

    /// Category chips with their selected flag, in display order
    pub fn categories(&self) -> Vec<(Category, bool)> {
        let selection = self.selection.snapshot();
        Category::ALL
            .into_iter()
            .map(|c| (c, selection.contains(c)))
            .collect()
    }

    /// Where the photo of `item` is served from
    pub fn image_url(&self, item: &MenuItem) -> String {
        item.image_url(&self.image_base_url)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Toggle a chip and schedule a filtered view
    pub fn toggle_category(&mut self, category: Category) -> bool {
        let selected = self.selection.toggle(category);
        self.refresh();
        selected
    }

    /// Toggle a chip by category id (`"mains"`). Unknown ids change nothing.
    pub fn toggle_category_id(&mut self, id: &str) -> Option<bool> {
        let category = Category::parse(id)?;
        Some(self.toggle_category(category))
    }

    /// Update the search box and schedule a filtered view
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh();
    }

    /// Schedule a filtered view for the current chips and search term
    pub fn refresh(&self) {
        self.debouncer.request(FilterRequest {
            categories: self.selection.snapshot(),
            search_term: self.search_term.clone(),
        });
    }

    /// Wait for the next filtered view
    pub async fn next_outcome(&mut self) -> Option<FilterOutcome> {
        self.outcomes.recv().await
    }

    /// Leave the screen; pending filter requests never run
    pub fn close(self) {
        self.debouncer.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_IMAGE_BASE_URL;
    use crate::test_support::{greek_salad, sample_menu, test_session, FakeRemote};

    #[tokio::test(start_paused = true)]
    async fn test_home_load_and_filter() {
        let session = test_session(Arc::new(FakeRemote::serving(sample_menu()))).await;
        let mut home = HomeScreen::open(&session);

        assert_eq!(home.load().await.unwrap().len(), sample_menu().len());

        home.toggle_category(Category::Starters);
        home.toggle_category(Category::Drinks);
        home.set_search_term("G");
        home.set_search_term("Greek");

        let outcome = home.next_outcome().await.unwrap();
        assert_eq!(outcome.request.search_term, "Greek");
        let names: Vec<String> = outcome.result.unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Greek Salad", "Greek Lemonade"]);
    }

    #[tokio::test]
    async fn test_selection_is_shared_with_session() {
        let session = test_session(Arc::new(FakeRemote::serving(sample_menu()))).await;
        let mut home = HomeScreen::open(&session);

        home.toggle_category(Category::Mains);
        assert!(session.selection().snapshot().contains(Category::Mains));

        let chips = home.categories();
        assert_eq!(chips.len(), 5);
        assert_eq!(chips[1], (Category::Mains, true));
        assert_eq!(chips[0], (Category::Starters, false));
        home.close();
    }

    #[tokio::test]
    async fn test_image_url_uses_configured_base() {
        let session = test_session(Arc::new(FakeRemote::serving(vec![greek_salad()]))).await;
        let home = HomeScreen::open(&session);

        let menu = home.load().await.unwrap();
        assert_eq!(
            home.image_url(&menu[0]),
            format!("{}/greek.jpg?raw=true", DEFAULT_IMAGE_BASE_URL)
        );
        home.close();
    }

    #[tokio::test]
    async fn test_toggle_category_by_id() {
        let session = test_session(Arc::new(FakeRemote::serving(sample_menu()))).await;
        let mut home = HomeScreen::open(&session);

        assert_eq!(home.toggle_category_id("desserts"), Some(true));
        assert_eq!(home.toggle_category_id("Desserts"), None);
        assert_eq!(home.toggle_category_id("brunch"), None);
        assert!(session.selection().snapshot().contains(Category::Desserts));
        assert_eq!(session.selection().snapshot().len(), 1);

        assert_eq!(home.toggle_category_id("desserts"), Some(false));
        assert!(session.selection().snapshot().is_empty());
        home.close();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_load_then_filter_reports_empty_view() {
        let session = test_session(Arc::new(FakeRemote::failing())).await;
        let mut home = HomeScreen::open(&session);

        assert!(home.load().await.is_err());

        home.set_search_term("Greek");
        assert_eq!(home.search_term(), "Greek");
        let outcome = home.next_outcome().await.unwrap();
        assert!(outcome.result.unwrap().is_empty());
    }
}
