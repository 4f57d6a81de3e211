//! Application Configuration
//!
//! Read from environment variables; anything missing or unparsable falls
//! back to a default with a log line.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};

pub const DEFAULT_MENU_URL: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/capstone.json";
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://github.com/Meta-Mobile-Developer-PC/Working-With-Data-API/blob/main/images";
pub const DEFAULT_DB_PATH: &str = "little_lemon.db";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// SQLite database file (`:memory:` for a throwaway store)
    pub db_path: PathBuf,
    pub menu_url: String,
    pub image_base_url: String,
    /// Quiet period of the filter debouncer
    pub debounce: Duration,
    pub http_timeout: Duration,
    /// Directory for rolling log files; logging is left to the host when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            menu_url: DEFAULT_MENU_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            db_path: PathBuf::from(try_load("LITTLE_LEMON_DB_PATH", DEFAULT_DB_PATH.to_string())),
            menu_url: try_load("LITTLE_LEMON_MENU_URL", DEFAULT_MENU_URL.to_string()),
            image_base_url: try_load("LITTLE_LEMON_IMAGE_BASE_URL", DEFAULT_IMAGE_BASE_URL.to_string()),
            debounce: Duration::from_millis(try_load("LITTLE_LEMON_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)),
            http_timeout: Duration::from_secs(try_load(
                "LITTLE_LEMON_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
            log_dir: var("LITTLE_LEMON_LOG_DIR").ok().map(PathBuf::from),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("{key} not set, using default");
    })
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default");
            default
        }),
        Err(()) => default,
    }
}
