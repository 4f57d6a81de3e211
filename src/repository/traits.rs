//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::Entity;
use crate::error::{MenuResult, PrefsResult};
use super::menu_filter::MenuFilter;

/// Bulk-loaded store: rows arrive all at once and leave all at once.
///
/// All operations are async to support various backends.
#[async_trait]
pub trait BulkRepository<T: Entity>: Send + Sync {
    /// List every row in insertion order
    async fn list(&self) -> MenuResult<Vec<T>>;

    /// Number of stored rows
    async fn count(&self) -> MenuResult<usize>;

    /// Insert all drafts atomically, returning them with assigned IDs
    async fn insert_many(&self, drafts: &[T::Draft]) -> MenuResult<Vec<T>>;

    /// Delete every row
    async fn clear(&self) -> MenuResult<()>;
}

/// Extension for repositories that support category + text filtering
#[async_trait]
pub trait FilterableRepository<T: Entity>: BulkRepository<T> {
    async fn filter(&self, filter: &MenuFilter) -> MenuResult<Vec<T>>;
}

/// String key-value persistence for session preferences
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> PrefsResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> PrefsResult<()>;

    async fn remove(&self, key: &str) -> PrefsResult<()>;

    /// Remove every stored preference
    async fn clear(&self) -> PrefsResult<()>;
}
