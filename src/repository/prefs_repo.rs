//! Preference Repository
//!
//! Key-value persistence for onboarding state and profile fields, plus a
//! typed profile view on top of it.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use std::sync::Arc;

use crate::domain::{NotificationPrefs, Profile};
use crate::error::{PrefsError, PrefsResult};
use super::db::SharedConnection;
use super::traits::PreferenceStore;

pub const KEY_ONBOARDING_COMPLETED: &str = "@onboarding_completed";
pub const KEY_LOGGED_IN: &str = "@logged_in";
pub const KEY_FIRST_NAME: &str = "@first_name";
pub const KEY_LAST_NAME: &str = "@last_name";
pub const KEY_EMAIL: &str = "@email";
pub const KEY_PHONE: &str = "@phone";
pub const KEY_AVATAR: &str = "@avatar";
pub const KEY_NOTIFICATIONS: &str = "@notifications";

fn storage_err(e: rusqlite::Error) -> PrefsError {
    log::error!("Preference store error: {}", e);
    PrefsError::Storage(e.to_string())
}

/// SQLite implementation of [`PreferenceStore`]
pub struct SqlitePreferenceStore {
    conn: SharedConnection,
}

impl SqlitePreferenceStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT value FROM preferences WHERE key = ?",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(storage_err)
    }

    async fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?, ?)",
            params![key, value],
        )
        .map_err(storage_err)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> PrefsResult<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM preferences WHERE key = ?", params![key])
            .map_err(storage_err)?;
        Ok(())
    }

    async fn clear(&self) -> PrefsResult<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM preferences", []).map_err(storage_err)?;
        Ok(())
    }
}

/// Typed access to the profile fields kept in a [`PreferenceStore`]
#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn PreferenceStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Load the stored profile; missing fields come back empty
    pub async fn load(&self) -> PrefsResult<Profile> {
        let notifications = match self.store.get(KEY_NOTIFICATIONS).await? {
            Some(json) => serde_json::from_str::<NotificationPrefs>(&json)?,
            None => NotificationPrefs::default(),
        };

        Ok(Profile {
            first_name: self.store.get(KEY_FIRST_NAME).await?.unwrap_or_default(),
            last_name: self.store.get(KEY_LAST_NAME).await?.unwrap_or_default(),
            email: self.store.get(KEY_EMAIL).await?.unwrap_or_default(),
            phone: self.store.get(KEY_PHONE).await?.unwrap_or_default(),
            avatar: self.store.get(KEY_AVATAR).await?.filter(|a| !a.is_empty()),
            notifications,
        })
    }

    /// Store every profile field; a `None` avatar removes the stored one
    pub async fn save(&self, profile: &Profile) -> PrefsResult<()> {
        self.store.set(KEY_FIRST_NAME, &profile.first_name).await?;
        self.store.set(KEY_LAST_NAME, &profile.last_name).await?;
        self.store.set(KEY_EMAIL, &profile.email).await?;
        self.store.set(KEY_PHONE, &profile.phone).await?;
        match &profile.avatar {
            Some(avatar) => self.store.set(KEY_AVATAR, avatar).await?,
            None => self.store.remove(KEY_AVATAR).await?,
        }
        let notifications = serde_json::to_string(&profile.notifications)?;
        self.store.set(KEY_NOTIFICATIONS, &notifications).await
    }

    pub async fn remove_avatar(&self) -> PrefsResult<()> {
        self.store.remove(KEY_AVATAR).await
    }
}
