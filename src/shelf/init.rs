use crate::api::{ShelfApi, ShelfPaths};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs::{JsonFavoriteStore, JsonFileSource, PRODUCTS_FILENAME};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the data directory.
pub const HOME_ENV: &str = "SHELF_HOME";

pub struct ShelfContext {
    pub api: ShelfApi<JsonFileSource, JsonFavoriteStore>,
}

/// `SHELF_HOME` if set and non-empty, else the platform data directory.
pub fn resolve_data_dir(home_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = home_override.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(home);
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine data directory".to_string()))
}

/// `--data` wins over the configured source, which wins over
/// `products.json` in the working directory.
pub fn resolve_source(cwd: &Path, data_override: Option<PathBuf>, config: &ShelfConfig) -> PathBuf {
    data_override
        .or_else(|| config.source.as_ref().map(PathBuf::from))
        .map(|p| if p.is_absolute() { p } else { cwd.join(p) })
        .unwrap_or_else(|| cwd.join(PRODUCTS_FILENAME))
}

pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> Result<ShelfContext> {
    let data_dir = resolve_data_dir(std::env::var_os(HOME_ENV).map(PathBuf::from))?;
    let config = ShelfConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not read config, using defaults");
        ShelfConfig::default()
    });
    let source_path = resolve_source(cwd, data_override, &config);
    debug!(data_dir = %data_dir.display(), source = %source_path.display(), "initialized");

    let api = ShelfApi::new(
        JsonFileSource::new(source_path),
        JsonFavoriteStore::new(&data_dir),
        ShelfPaths { data_dir },
        config,
    );
    Ok(ShelfContext { api })
}
