//! File-backed JSON store for campus and interior configuration documents
//!
//! The campus record set lives in one document at the store root; each
//! building's interior configuration is its own document under
//! `buildings/<id>_interior.json`, giving the interior store plain
//! get/put/exists semantics keyed by building id.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::config::CampusConfig;
use crate::Error;
use crate::model::interior::InteriorConfig;

const CAMPUS_CONFIG_FILE: &str = "campus_config.json";
const INTERIORS_DIR: &str = "buildings";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn campus_path(&self) -> PathBuf {
        self.root.join(CAMPUS_CONFIG_FILE)
    }

    fn interior_path(&self, building_id: &str) -> PathBuf {
        self.root
            .join(INTERIORS_DIR)
            .join(format!("{building_id}_interior.json"))
    }

    /// Load the campus document, or `None` when no document has been stored
    pub fn load_campus(&self) -> Result<Option<CampusConfig>, Error> {
        let path = self.campus_path();
        if !path.exists() {
            warn!("{} not found, using default configuration", path.display());
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        let config: CampusConfig = serde_json::from_str(&raw)?;
        info!(
            "Loaded campus config: {} buildings, {} intersections",
            config.buildings.len(),
            config.intersections.len()
        );
        Ok(Some(config))
    }

    pub fn save_campus(&self, config: &CampusConfig) -> Result<(), Error> {
        fs::create_dir_all(&self.root)?;
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(self.campus_path(), raw)?;
        Ok(())
    }

    /// Load one building's interior document, or `None` when absent
    pub fn load_interior(&self, building_id: &str) -> Result<Option<InteriorConfig>, Error> {
        let path = self.interior_path(building_id);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn save_interior(&self, config: &InteriorConfig) -> Result<(), Error> {
        fs::create_dir_all(self.root.join(INTERIORS_DIR))?;
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(self.interior_path(&config.building_id), raw)?;
        Ok(())
    }

    pub fn interior_exists(&self, building_id: &str) -> bool {
        self.interior_path(building_id).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_campus_document_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        assert!(store.load_campus().unwrap().is_none());
    }

    #[test]
    fn campus_document_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        let config = CampusConfig::default_campus();
        store.save_campus(&config).unwrap();

        let loaded = store.load_campus().unwrap().unwrap();
        assert_eq!(loaded.buildings.len(), config.buildings.len());
        assert_eq!(loaded.campus_paths, config.campus_paths);
    }

    #[test]
    fn interior_documents_are_keyed_by_building() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        assert!(!store.interior_exists("Main_Library"));

        let config = InteriorConfig::default_for("Main_Library", "Main Library");
        store.save_interior(&config).unwrap();
        assert!(store.interior_exists("Main_Library"));
        assert!(!store.interior_exists("Gym"));

        let loaded = store.load_interior("Main_Library").unwrap().unwrap();
        assert_eq!(loaded.building_id, "Main_Library");
        assert_eq!(loaded.floors.len(), 1);
    }

    #[test]
    fn corrupt_campus_document_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        fs::write(dir.path().join(CAMPUS_CONFIG_FILE), "{not json").unwrap();
        assert!(matches!(
            store.load_campus(),
            Err(Error::ConfigError(_))
        ));
    }
}
