//! # Storage Layer
//!
//! Two seams connect shelf to the outside world:
//!
//! - [`ProductSource`]: a one-shot supplier of the product catalog.
//! - [`FavoriteStore`]: persistence for the set of favorited product ids.
//!
//! Both are traits so commands can run against files in production and
//! against memory in tests.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileSource`]: reads a JSON array of products (`products.json`)
//! - [`fs::JsonFavoriteStore`]: `favorites.json` in the data directory,
//!   written atomically (temp file + rename)
//! - [`memory::StaticSource`]: an in-memory product list
//! - [`memory::MemFavoriteStore`]: in-memory favorites with write-error
//!   simulation
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── favorites.json   # JSON array of product ids
//! └── config.json      # ShelfConfig
//! ```

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

/// Supplies the full product catalog.
///
/// Any failure (missing file, unreadable data) is reported as
/// [`ShelfError::Fetch`](crate::error::ShelfError::Fetch). There are no
/// partial results.
pub trait ProductSource {
    fn fetch_all(&self) -> Result<Vec<Product>>;

    /// Where the products come from, for diagnostics.
    fn describe(&self) -> String;
}

/// Persistence for the favorite set.
///
/// `load` never fails: absence or corruption yields an empty set. `save`
/// replaces the whole persisted set.
pub trait FavoriteStore {
    fn load(&self) -> Vec<String>;
    fn save(&self, ids: &[String]) -> Result<()>;
}

impl<T: ProductSource + ?Sized> ProductSource for &T {
    fn fetch_all(&self) -> Result<Vec<Product>> {
        (**self).fetch_all()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: FavoriteStore + ?Sized> FavoriteStore for &T {
    fn load(&self) -> Vec<String> {
        (**self).load()
    }

    fn save(&self, ids: &[String]) -> Result<()> {
        (**self).save(ids)
    }
}

/// Lifecycle of a one-shot fetch. Never retried.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetches from `source`, turning the outcome into a [`LoadState`].
pub fn load_products<P: ProductSource>(source: &P) -> LoadState<Vec<Product>> {
    tracing::info!(source = %source.describe(), "fetching products");
    let state = LoadState::from_result(source.fetch_all());
    match &state {
        LoadState::Loaded(products) => {
            tracing::info!(count = products.len(), "products loaded")
        }
        LoadState::Failed(message) => tracing::warn!(error = %message, "product fetch failed"),
        LoadState::Loading => {}
    }
    state
}
