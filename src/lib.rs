//! Little Lemon Core
//!
//! Headless core of the Little Lemon ordering app.
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and SQLite implementations
//! - remote: The canonical menu served over HTTP
//! - pipeline: Cache-then-fetch menu loading and filtered views
//! - debounce: Coalescing of rapid filter input
//! - session: Owner of the state shared between screens
//! - commands: Onboarding, home and profile screen operations

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod remote;
pub mod pipeline;
pub mod debounce;
pub mod session;
pub mod commands;

#[cfg(test)]
mod test_support;

pub use config::AppConfig;
pub use error::{MenuError, PrefsError, SessionError};
pub use pipeline::{MenuPipeline, PipelineState};
pub use session::AppSession;
