use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Tournament, TournamentCollection};
use crate::errors::{cache_context, parse_context};

/// Directory of fetched brackets, one JSON file per tournament.
///
/// The file stem is the tournament id; a `.json` extension is optional.
pub struct Cache {
    cache_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();

        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

        Ok(Self { cache_dir })
    }

    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Load every cached tournament; any unreadable file aborts the load
    pub fn load_tournaments(&self) -> Result<TournamentCollection> {
        let mut collection = TournamentCollection::new();

        for path in self.list_files()? {
            let id = tournament_id(&path);
            let mut tournament: Tournament = self
                .read_json(&path)
                .with_context(|| cache_context("read", &id))?;
            tournament.id = id;

            debug!("Loaded {} from {}", tournament.id, path.display());
            collection.add(tournament);
        }

        info!("Loaded {} tournaments from {}", collection.len(), self.cache_dir.display());
        Ok(collection)
    }

    // --- Helper Methods ---

    fn list_files(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in fs::read_dir(&self.cache_dir).context("Failed to list cache directory")? {
            let path = entry?.path();
            if path.is_file() && !is_hidden(&path) {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<T> {
        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json)
            .with_context(|| format!("{} from {:?}. First 200 chars: {}",
                parse_context("tournament"),
                path,
                json.chars().take(200).collect::<String>()))?;
        Ok(data)
    }
}

fn tournament_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(name: &str) -> Cache {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        Cache::new(&dir).unwrap()
    }

    #[test]
    fn test_cache_load_reads_json_files() {
        let cache = temp_cache("bracket_rankings_test_cache");
        let json = r#"{
            "matches": [
                {"winner-id": 1, "player1-id": 1, "player2-id": 2, "created-at": "2024-01-01T18:00:00Z"}
            ],
            "participants": [
                {"id": 1, "name": "Alice", "created-at": "2024-01-01"},
                {"id": 2, "name": "Bob", "created-at": "2024-01-01"}
            ]
        }"#;
        fs::write(cache.dir().join("sdhs31.json"), json).unwrap();

        let loaded = cache.load_tournaments().unwrap().into_chronological().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "sdhs31");
        assert_eq!(loaded[0].participants.len(), 2);
        assert_eq!(loaded[0].matches[0].winner_id, Some(1));

        // Cleanup
        fs::remove_dir_all(cache.dir()).unwrap();
    }

    #[test]
    fn test_extensionless_files_use_name_as_id() {
        let cache = temp_cache("bracket_rankings_test_cache_plain");
        let json = r#"{"matches": [], "participants": [{"id": 1, "name": "A", "created-at": "2024-01-01"}]}"#;
        fs::write(cache.dir().join("showdowngg-SDHS32"), json).unwrap();

        let loaded = cache.load_tournaments().unwrap().into_chronological().unwrap();
        assert_eq!(loaded[0].id, "showdowngg-SDHS32");

        fs::remove_dir_all(cache.dir()).unwrap();
    }

    #[test]
    fn test_malformed_file_aborts_load() {
        let cache = temp_cache("bracket_rankings_test_cache_bad");
        let json = r#"{"matches": [{"winner-id": 1, "created-at": "2024-01-01"}], "participants": []}"#;
        fs::write(cache.dir().join("broken.json"), json).unwrap();

        let err = cache.load_tournaments().unwrap_err();
        assert!(format!("{:#}", err).contains("broken"));

        fs::remove_dir_all(cache.dir()).unwrap();
    }
}
