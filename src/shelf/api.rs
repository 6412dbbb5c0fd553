//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every shelf operation, whatever UI sits on top.
//!
//! It:
//! - **Owns the session**: the product source, the loaded catalog, the
//!   favorites, and the configuration
//! - **Normalizes inputs** (`column=value` filters, `column:dir` sort keys)
//! - **Dispatches** to `commands/*.rs` and returns `Result<CmdResult>`
//!
//! It does no I/O of its own beyond what the storage traits do, and never
//! formats output.
//!
//! ## Catalog Lifecycle
//!
//! The catalog is fetched once per session. [`ShelfApi::load`] moves it from
//! `Loading` to `Loaded` or `Failed`; a failed fetch is never retried and every
//! command that needs products reports [`ShelfError::Fetch`].
//!
//! ## Generic Over Storage
//!
//! `ShelfApi<P: ProductSource, F: FavoriteStore>`:
//! - Production: `ShelfApi<JsonFileSource, JsonFavoriteStore>`
//! - Testing: `ShelfApi<StaticSource, MemFavoriteStore>`

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::favorites::Favorites;
use crate::model::Product;
use crate::store::{load_products, FavoriteStore, LoadState, ProductSource};
use crate::table::SortKey;

/// Raw list options as a UI collects them.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub search: Option<String>,
    /// `column=value` expressions.
    pub filters: Vec<String>,
    pub favorites_only: bool,
    /// `column[:asc|desc]` expressions.
    pub sort: Vec<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub hide: Vec<String>,
    pub select: Vec<String>,
}

pub struct ShelfApi<P: ProductSource, F: FavoriteStore> {
    source: P,
    catalog: LoadState<Vec<Product>>,
    favorites: Favorites<F>,
    paths: commands::ShelfPaths,
    config: ShelfConfig,
}

impl<P: ProductSource, F: FavoriteStore> ShelfApi<P, F> {
    pub fn new(
        source: P,
        favorite_store: F,
        paths: commands::ShelfPaths,
        config: ShelfConfig,
    ) -> Self {
        Self {
            source,
            catalog: LoadState::Loading,
            favorites: Favorites::load(favorite_store),
            paths,
            config,
        }
    }

    /// Fetches the catalog if it has not been fetched yet.
    pub fn load(&mut self) -> &LoadState<Vec<Product>> {
        if self.catalog.is_loading() {
            self.catalog = load_products(&self.source);
        }
        &self.catalog
    }

    pub fn load_state(&self) -> &LoadState<Vec<Product>> {
        &self.catalog
    }

    fn products(&mut self) -> Result<Vec<Product>> {
        match self.load() {
            LoadState::Loaded(products) => Ok(products.clone()),
            LoadState::Failed(message) => Err(ShelfError::Fetch(message.clone())),
            LoadState::Loading => Err(ShelfError::Fetch("catalog not loaded".to_string())),
        }
    }

    pub fn list(&mut self, request: &ListRequest) -> Result<commands::CmdResult> {
        let query = parse_list_request(request)?;
        let products = self.products()?;
        commands::list::run(products, self.favorites.set(), &self.config, &query)
    }

    pub fn toggle_favorites<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let products = self.products()?;
        commands::favorite::run(&products, &self.favorites, ids)
    }

    pub fn show(&mut self, id: &str) -> Result<commands::CmdResult> {
        let products = self.products()?;
        commands::show::run(&products, self.favorites.set(), id)
    }

    pub fn columns(&self) -> Result<commands::CmdResult> {
        commands::columns::run(self.favorites.set(), self.config.global_search)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn favorites(&self) -> &Favorites<F> {
        &self.favorites
    }

    pub fn paths(&self) -> &commands::ShelfPaths {
        &self.paths
    }

    pub fn settings(&self) -> &ShelfConfig {
        &self.config
    }
}

fn parse_list_request(request: &ListRequest) -> Result<commands::ListQuery> {
    let filters = request
        .filters
        .iter()
        .map(|expr| commands::list::parse_filter_expr(expr))
        .collect::<Result<Vec<_>>>()?;
    let sort = request
        .sort
        .iter()
        .map(|expr| expr.parse::<SortKey>())
        .collect::<Result<Vec<_>>>()?;

    Ok(commands::ListQuery {
        search: request.search.clone(),
        filters,
        favorites_only: request.favorites_only,
        sort,
        page: request.page,
        page_size: request.page_size,
        hidden: request.hide.clone(),
        selected: request.select.clone(),
    })
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::{ControlState, SearchBox};
pub use commands::{CmdMessage, CmdResult, ColumnInfo, Listing, MessageLevel, ShelfPaths};
