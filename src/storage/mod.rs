//! # Storage Module
//!
//! Persistence for the medication collection. The domain layer only
//! sees the `MedicationStore` trait; the default backing is a single
//! JSON file, with an in-memory store available for tests and
//! embedders.

pub mod json;
pub mod memory;
pub mod traits;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::MedicationStore;
