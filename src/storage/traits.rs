//! # Storage Traits
//!
//! Defines the persistence abstraction so the domain layer can work
//! with any backing slot (a JSON file, an in-memory fake) without
//! modification.

use crate::domain::models::Medication;
use anyhow::Result;

/// Trait defining the interface for the medication persistence slot.
///
/// The whole collection is read once at startup and written back in
/// full after every mutation. There is no partial or incremental
/// persistence.
pub trait MedicationStore: Send + Sync {
    /// Load the persisted collection, in insertion order.
    ///
    /// Returns an empty collection when no data has been persisted yet
    /// or when the persisted content cannot be deserialized.
    fn load(&self) -> Result<Vec<Medication>>;

    /// Persist the entire collection, overwriting prior content.
    fn save_all(&self, medications: &[Medication]) -> Result<()>;
}
