//! Catalog persistence.
//!
//! The catalog is a number → puzzle-text store kept as a single JSON file at
//! `~/.lok/catalog.json`. When the file is missing or unreadable, the
//! built-in puzzle list is used instead.

use crate::builtin_puzzles;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// One catalog entry: a puzzle number and its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub num: u32,
    pub puzzle: String,
}

/// The puzzle catalog, ordered by puzzle number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Get the catalog file path (`~/.lok/catalog.json`).
pub fn catalog_path() -> Result<PathBuf, CatalogError> {
    let home = dirs::home_dir().ok_or(CatalogError::NoHomeDir)?;
    Ok(home.join(".lok").join("catalog.json"))
}

impl Catalog {
    /// A catalog holding only the built-in puzzles.
    pub fn with_builtin() -> Self {
        Self {
            entries: builtin_puzzles(),
        }
    }

    /// Load the catalog from disk, falling back to the built-ins when there
    /// is no usable file.
    pub fn load() -> Self {
        match catalog_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::with_builtin(),
        }
    }

    /// Load a catalog from a specific file, falling back to the built-ins.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::with_builtin();
        };
        serde_json::from_str(&contents).unwrap_or_else(|_| Self::with_builtin())
    }

    /// Save the catalog to its default location.
    pub fn save(&self) -> Result<PathBuf, CatalogError> {
        let path = catalog_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save the catalog to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, num: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.num == num)
    }

    /// The next free puzzle number, offered as a default when saving.
    pub fn next_num(&self) -> u32 {
        self.entries.last().map_or(1, |entry| entry.num + 1)
    }

    /// Insert an entry, replacing any existing puzzle with the same number
    /// and keeping the catalog sorted.
    pub fn upsert(&mut self, entry: CatalogEntry) {
        self.entries.retain(|existing| existing.num != entry.num);
        self.entries.push(entry);
        self.entries.sort_by_key(|entry| entry.num);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("lok-catalog-test-{}-{name}", std::process::id()))
            .join("catalog.json")
    }

    #[test]
    fn upsert_replaces_and_sorts() {
        let mut catalog = Catalog { entries: vec![] };
        catalog.upsert(CatalogEntry {
            num: 5,
            puzzle: "K".to_string(),
        });
        catalog.upsert(CatalogEntry {
            num: 2,
            puzzle: "L".to_string(),
        });
        catalog.upsert(CatalogEntry {
            num: 5,
            puzzle: "O".to_string(),
        });

        let nums: Vec<u32> = catalog.entries().iter().map(|e| e.num).collect();
        assert_eq!(nums, vec![2, 5]);
        assert_eq!(catalog.get(5).unwrap().puzzle, "O");
        assert_eq!(catalog.next_num(), 6);
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let catalog = Catalog::load_from(Path::new("/nonexistent/catalog.json"));
        assert_eq!(catalog, Catalog::with_builtin());
        assert!(catalog.get(2).is_some());
    }

    #[test]
    fn file_round_trip() {
        let path = temp_path("round-trip");
        let mut catalog = Catalog::with_builtin();
        catalog.upsert(CatalogEntry {
            num: 100,
            puzzle: "LOK ".to_string(),
        });

        catalog.save_to(&path).unwrap();
        let loaded = Catalog::load_from(&path);
        assert_eq!(loaded, catalog);
        assert_eq!(loaded.get(100).unwrap().puzzle, "LOK ");

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn corrupt_file_falls_back_to_builtin() {
        let path = temp_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(Catalog::load_from(&path), Catalog::with_builtin());

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
