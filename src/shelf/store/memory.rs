use super::{FavoriteStore, ProductSource};
use crate::error::{Result, ShelfError};
use crate::model::Product;
use std::cell::RefCell;

/// A fixed product list, or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticSource {
    products: Vec<Product>,
    failure: Option<String>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            failure: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl ProductSource for StaticSource {
    fn fetch_all(&self) -> Result<Vec<Product>> {
        match &self.failure {
            Some(message) => Err(ShelfError::Fetch(message.clone())),
            None => Ok(self.products.clone()),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// In-memory favorite store for testing.
///
/// Uses `RefCell` since shelf is single-threaded; the trait takes `&self`.
#[derive(Default)]
pub struct MemFavoriteStore {
    ids: RefCell<Vec<String>>,
    saves: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::default();
        *store.ids.borrow_mut() = ids.into_iter().map(Into::into).collect();
        store
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl FavoriteStore for MemFavoriteStore {
    fn load(&self) -> Vec<String> {
        self.ids.borrow().clone()
    }

    fn save(&self, ids: &[String]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        *self.ids.borrow_mut() = ids.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
