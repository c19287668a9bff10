//! Single-slot store for the trip remembered on this device.
//!
//! At most one trip id lives here at a time; creating a new trip
//! overwrites it and `planner forget` clears it.

use std::path::PathBuf;

use anyhow::{Context, Result};

const ACTIVE_TRIP_FILE: &str = "active_trip";

pub struct TripStore {
    path: PathBuf,
}

impl TripStore {
    pub fn open() -> Result<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .join("planner");

        Ok(TripStore {
            path: dir.join(ACTIVE_TRIP_FILE),
        })
    }

    #[cfg(test)]
    fn at(path: PathBuf) -> Self {
        TripStore { path }
    }

    /// The stored trip id, if any.
    pub fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let id = content.trim();

        if id.is_empty() { None } else { Some(id.to_string()) }
    }

    pub fn save(&self, trip_id: &str) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Store path has no parent directory"))?;
        std::fs::create_dir_all(dir)?;

        // Write to a temp file, then rename into place
        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, trip_id)
            .with_context(|| format!("Failed to write {}", temp.display()))?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}
