use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "books.json";

pub const DATA_FILE_KEY: &str = "data-file";

/// Configuration for bookshelf, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Inventory file. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl LibraryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: LibraryConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            DATA_FILE_KEY => Some(self.data_file.display().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            DATA_FILE_KEY => {
                if value.trim().is_empty() {
                    return Err(LibraryError::Config("data-file cannot be empty".to_string()));
                }
                self.data_file = PathBuf::from(value);
                Ok(())
            }
            other => Err(LibraryError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        vec![(
            DATA_FILE_KEY.to_string(),
            self.data_file.display().to_string(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibraryConfig::default();
        assert_eq!(config.data_file, PathBuf::from("books.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = LibraryConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("nested").join("bookshelf");

        let mut config = LibraryConfig::default();
        config.set(DATA_FILE_KEY, "/srv/library/books.json").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = LibraryConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("/srv/library/books.json"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        assert_eq!(
            LibraryConfig::load(dir.path()).unwrap(),
            LibraryConfig::default()
        );
    }

    #[test]
    fn test_unknown_key() {
        let mut config = LibraryConfig::default();
        assert!(config.get("colour").is_none());
        assert!(matches!(
            config.set("colour", "blue"),
            Err(LibraryError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_blank_data_file() {
        let mut config = LibraryConfig::default();
        assert!(config.set(DATA_FILE_KEY, "  ").is_err());
        assert_eq!(config, LibraryConfig::default());
    }
}
