//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for stored entities.
//! Every entity has a store-assigned ID and a draft form without one.

/// Core trait for all stored entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// The entity before the store assigns an ID
    type Draft: Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
