//! In-memory implementation of `MedicationStore`, used as the test
//! double and by embedders that handle persistence themselves.

use anyhow::Result;
use std::sync::Mutex;

use crate::domain::models::Medication;
use crate::storage::traits::MedicationStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    medications: Mutex<Vec<Medication>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MedicationStore for MemoryStore {
    fn load(&self) -> Result<Vec<Medication>> {
        Ok(self.medications.lock().unwrap().clone())
    }

    fn save_all(&self, medications: &[Medication]) -> Result<()> {
        *self.medications.lock().unwrap() = medications.to_vec();
        Ok(())
    }
}
