use crate::error::{Result, ShelfError};
use crate::table::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 3] = ["page-size", "source", "global-search"];

/// Configuration for shelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Rows per page in the product table
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Products file used when `--data` is not given
    #[serde(default)]
    pub source: Option<String>,

    /// Whether the cross-column search box replaces text/number filters
    #[serde(default = "default_global_search")]
    pub global_search: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_global_search() -> bool {
    true
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            source: None,
            global_search: true,
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "page-size" => Ok(self.page_size.to_string()),
            "source" => Ok(self.source.clone().unwrap_or_default()),
            "global-search" => Ok(self.global_search.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "page-size" => {
                let size: usize = value.trim().parse().map_err(|_| {
                    ShelfError::Api(format!("page-size must be a positive integer, got \"{}\"", value))
                })?;
                if size == 0 {
                    return Err(ShelfError::Api("page-size must be at least 1".to_string()));
                }
                self.page_size = size;
            }
            "source" => {
                let value = value.trim();
                self.source = (!value.is_empty()).then(|| value.to_string());
            }
            "global-search" => {
                self.global_search = match value.trim().to_lowercase().as_str() {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => {
                        return Err(ShelfError::Api(format!(
                            "global-search must be true or false, got \"{}\"",
                            value
                        )))
                    }
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }
}

fn unknown_key(key: &str) -> ShelfError {
    ShelfError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.page_size, 10);
        assert!(config.global_search);
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = ShelfConfig::load(temp.path().join("missing")).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut config = ShelfConfig::default();
        config.set("page-size", "25").unwrap();
        config.set("global-search", "off").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = ShelfConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.page_size, 25);
        assert!(!loaded.global_search);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"page_size": 3}"#).unwrap();
        let loaded = ShelfConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.page_size, 3);
        assert!(loaded.global_search);
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = ShelfConfig::default();
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("page-size", "ten").is_err());
        assert!(config.set("global-search", "maybe").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_source_empty_value_clears() {
        let mut config = ShelfConfig::default();
        config.set("source", "/tmp/products.json").unwrap();
        assert_eq!(config.get("source").unwrap(), "/tmp/products.json");
        config.set("source", "").unwrap();
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_entries_order() {
        let keys: Vec<_> = ShelfConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS.to_vec());
    }
}
