//! Commands Layer
//!
//! Screen-facing operations that bridge a UI to the session's services.

mod onboarding_cmd;
mod home_cmd;
mod profile_cmd;

pub use onboarding_cmd::*;
pub use home_cmd::*;
pub use profile_cmd::*;
