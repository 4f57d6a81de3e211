//! Filter Debouncer
//!
//! Coalesces bursts of filter changes (chip toggles, search typing) into a
//! single pipeline query once input has been quiet for the configured period.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::domain::{CategorySelection, MenuItem};
use crate::error::MenuResult;
use crate::pipeline::MenuPipeline;

/// Parameters of one filtered view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    pub categories: CategorySelection,
    pub search_term: String,
}

/// Result of an executed request
#[derive(Debug)]
pub struct FilterOutcome {
    pub request: FilterRequest,
    pub result: MenuResult<Vec<MenuItem>>,
}

pub struct FilterDebouncer {
    pipeline: Arc<MenuPipeline>,
    quiet_period: Duration,
    /// Parent of every request token; cancelled on teardown
    screen: CancellationToken,
    pending: Mutex<Option<CancellationToken>>,
    outcomes: mpsc::UnboundedSender<FilterOutcome>,
}

impl FilterDebouncer {
    pub fn new(
        pipeline: Arc<MenuPipeline>,
        quiet_period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<FilterOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            pipeline,
            quiet_period,
            screen: CancellationToken::new(),
            pending: Mutex::new(None),
            outcomes: tx,
        };
        (debouncer, rx)
    }

    /// Schedule `request`, replacing any request still waiting out its
    /// quiet period. Must be called within a tokio runtime.
    pub fn request(&self, request: FilterRequest) {
        if self.screen.is_cancelled() {
            log::debug!("Filter request after teardown ignored");
            return;
        }

        let token = self.screen.child_token();
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.replace(token.clone()) {
                previous.cancel();
            }
        }

        let pipeline = self.pipeline.clone();
        let outcomes = self.outcomes.clone();
        let quiet_period = self.quiet_period;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(quiet_period) => {}
            }

            let result = pipeline
                .query(&request.categories, &request.search_term)
                .await;
            if let Err(e) = &result {
                log::error!("Error filtering menu: {}", e);
            }

            // A screen torn down mid-query gets nothing written back
            if token.is_cancelled() {
                return;
            }
            let _ = outcomes.send(FilterOutcome { request, result });
        });
    }

    /// Cancel the pending request, if any, keeping the debouncer usable
    pub fn cancel_pending(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(token) = pending.take() {
                token.cancel();
            }
        }
    }

    /// Cancel everything; later requests are ignored
    pub fn teardown(&self) {
        self.screen.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.screen.is_cancelled()
    }
}

impl Drop for FilterDebouncer {
    fn drop(&mut self) {
        self.teardown();
    }
}
