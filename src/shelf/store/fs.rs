use super::{FavoriteStore, ProductSource};
use crate::error::{Result, ShelfError};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

pub const FAVORITES_FILENAME: &str = "favorites.json";
pub const PRODUCTS_FILENAME: &str = "products.json";

/// Reads the catalog from a JSON array on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for JsonFileSource {
    fn fetch_all(&self) -> Result<Vec<Product>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| ShelfError::Fetch(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| ShelfError::Fetch(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Favorites persisted as a JSON array in `favorites.json`.
pub struct JsonFavoriteStore {
    root: PathBuf,
}

impl JsonFavoriteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(FAVORITES_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl FavoriteStore for JsonFavoriteStore {
    fn load(&self) -> Vec<String> {
        let path = self.path();
        if !path.exists() {
            return Vec::new();
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read favorites, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt favorites file, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, ids: &[String]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(ids).map_err(ShelfError::Serialization)?;

        let tmp_file = self.root.join(format!(".favorites-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ShelfError::Io)?;
        fs::rename(&tmp_file, self.path()).map_err(ShelfError::Io)?;
        Ok(())
    }
}
