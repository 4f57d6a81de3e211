//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and regex).

mod entity;
mod menu_item;
mod category;
mod profile;

pub use entity::Entity;
pub use menu_item::{MenuItem, NewMenuItem};
pub use category::{Category, CategorySelection};
pub use profile::{NotificationPrefs, Profile, is_valid_email, is_valid_first_name, is_valid_phone};
