//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod menu_filter;
mod menu_repo;
mod prefs_repo;


pub use traits::{BulkRepository, FilterableRepository, PreferenceStore};
pub use db::{init_db, SharedConnection};
pub use menu_filter::MenuFilter;
pub use menu_repo::MenuRepository;
pub use prefs_repo::{
    ProfileRepository, SqlitePreferenceStore, KEY_AVATAR, KEY_EMAIL, KEY_FIRST_NAME,
    KEY_LAST_NAME, KEY_LOGGED_IN, KEY_NOTIFICATIONS, KEY_ONBOARDING_COMPLETED, KEY_PHONE,
};
