//! # JSON File Store
//!
//! File-based implementation of `MedicationStore` using a single JSON
//! file as the persistence slot.
//!
//! ## File Layout
//!
//! ```text
//! ~/Documents/MedTracker/
//! └── medications.json    ← the entire collection, one array
//! ```
//!
//! ## Features
//!
//! - Whole-collection reads and writes, no partial updates
//! - Atomic writes via a temp file and rename
//! - Fail-soft loading: a missing or unreadable file yields an empty
//!   collection instead of an error

use anyhow::Result;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::models::Medication;
use crate::storage::traits::MedicationStore;

/// JSON-file-backed medication store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Create a store in the default data directory,
    /// `~/Documents/MedTracker/medications.json`.
    pub fn new_default() -> Result<Self> {
        let documents = dirs::document_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine the Documents directory"))?;
        let data_dir = documents.join("MedTracker");
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
        }
        Ok(Self::new(data_dir.join("medications.json")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MedicationStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Medication>> {
        if !self.path.exists() {
            debug!("No medication file at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Vec<Medication>>(&content) {
            Ok(medications) => {
                debug!(
                    "Loaded {} medications from {:?}",
                    medications.len(),
                    self.path
                );
                Ok(medications)
            }
            Err(e) => {
                warn!(
                    "Stored medication data at {:?} is unreadable, starting empty: {}",
                    self.path, e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, medications: &[Medication]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(medications)?;

        // Atomic write pattern: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        debug!("Saved {} medications to {:?}", medications.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DayOfWeek, TimeSlot};
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::{BTreeMap, BTreeSet};
    use tempfile::tempdir;

    fn sample_medication() -> Medication {
        let start_date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut med = Medication {
            id: Medication::generate_id(1_700_000_000_000),
            name: "Metformin".to_string(),
            dosage: "500mg".to_string(),
            pill_count: 60,
            times_per_day: 2,
            schedule: vec![TimeSlot::Morning, TimeSlot::Evening],
            start_date,
            refill_alert: 7,
            take_with_food: true,
            days_of_week: BTreeSet::from([DayOfWeek::Monday, DayOfWeek::Thursday]),
            dose_taken: BTreeMap::new(),
            created_at: start_date.and_time(NaiveTime::MIN).and_utc(),
        };
        med.toggle_dose(start_date, TimeSlot::Morning);
        med
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("medications.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("medications.json"));
        let medications = vec![sample_medication()];

        store.save_all(&medications).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, medications);
        // the dose history map survives serialization
        assert!(loaded[0].dose_taken(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            TimeSlot::Morning
        ));
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("medications.json");
        fs::write(&path, "not valid json {{").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_prior_content() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("medications.json"));

        store.save_all(&[sample_medication()]).unwrap();
        store.save_all(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("medications.json"));

        store.save_all(&[sample_medication()]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
