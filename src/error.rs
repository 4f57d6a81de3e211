//! Error Types
//!
//! Every storage and network operation returns one of these instead of
//! relying on log output as the only failure signal.

use thiserror::Error;

/// Failures of the menu pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    #[error("Remote menu fetch failed: {0}")]
    RemoteFetchFailed(String),

    #[error("Menu store write failed: {0}")]
    StoreWriteFailed(String),

    #[error("Menu query failed: {0}")]
    QueryFailed(String),
}

pub type MenuResult<T> = Result<T, MenuError>;

/// Failures of the preference store and the screens built on it
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrefsError {
    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Preference serialization error: {0}")]
    Serialization(String),

    #[error("First name must not be empty")]
    InvalidFirstName,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Please enter a valid USA phone number")]
    InvalidPhone,

    #[error(transparent)]
    Menu(#[from] MenuError),
}

pub type PrefsResult<T> = Result<T, PrefsError>;

impl From<serde_json::Error> for PrefsError {
    fn from(err: serde_json::Error) -> Self {
        PrefsError::Serialization(err.to_string())
    }
}

/// Failures while opening an application session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to open database: {0}")]
    Database(String),

    #[error("Failed to build HTTP client: {0}")]
    Http(String),
}
