use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use super::table::MatchupTable;

/// JSON file the matchup table is persisted to between runs.
pub struct MatchupStore {
    path: PathBuf,
}

impl MatchupStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, table: &MatchupTable) -> Result<()> {
        let json = serde_json::to_string_pretty(table).context("Failed to serialize matchups")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write matchups to {}", self.path.display()))?;

        info!("Saved {} matchup records to {}", table.len(), self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<MatchupTable> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read matchups from {}", self.path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse matchups in {}", self.path.display()))
    }
}
