//! # Favorites Overlay
//!
//! Favorites are a set of record ids, persisted through a [`FavoriteStore`]
//! and loaded once per session. The in-memory [`FavoriteSet`] is the source of
//! truth: every toggle rewrites the whole persisted set, and a failed write is
//! logged but never undoes the toggle.
//!
//! The overlay adds a derived `favorite` column to a table. The column reads
//! the set through a shared handle, so a table built before a toggle sees the
//! new state on its next derivation (see [`TableStore::refresh`]).
//!
//! [`TableStore::refresh`]: crate::table::TableStore::refresh

use crate::error::Result;
use crate::store::FavoriteStore;
use crate::table::filter::parse_bool;
use crate::table::{ColumnDescriptor, ColumnRegistry, FilterConfig, TableRow};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::{debug, warn};

pub const FAVORITE_COLUMN_ID: &str = "favorite";
pub const STAR_ON: &str = "★";
pub const STAR_OFF: &str = "☆";

/// Shared, read-mostly handle on the favorite ids.
#[derive(Debug, Clone, Default)]
pub struct FavoriteSet(Rc<RefCell<BTreeSet<String>>>);

impl FavoriteSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Rc::new(RefCell::new(ids.into_iter().map(Into::into).collect())))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.borrow().contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Sorted snapshot of the ids.
    pub fn ids(&self) -> Vec<String> {
        self.0.borrow().iter().cloned().collect()
    }

    /// Returns the new membership of `id`.
    fn toggle(&self, id: &str) -> bool {
        let mut set = self.0.borrow_mut();
        if set.remove(id) {
            false
        } else {
            set.insert(id.to_string());
            true
        }
    }

    /// The derived `favorite` column: ★/☆ rendering, a boolean filter, and a
    /// predicate that compares the filter value against membership.
    pub fn column<R: TableRow + 'static>(&self) -> ColumnDescriptor<R> {
        let accessed = self.clone();
        let rendered = self.clone();
        let filtered = self.clone();
        ColumnDescriptor::accessor(FAVORITE_COLUMN_ID, "Favorite", move |r: &R| {
            accessed.contains(r.row_id()).into()
        })
        .with_filter(FilterConfig::boolean().with_placeholder("Favorites..."))
        .with_predicate(move |r: &R, value: &str| {
            parse_bool(value)
                .map(|wanted| filtered.contains(r.row_id()) == wanted)
                .unwrap_or(false)
        })
        .with_renderer(move |r: &R| {
            if rendered.contains(r.row_id()) {
                STAR_ON.to_string()
            } else {
                STAR_OFF.to_string()
            }
        })
    }

    /// Prepends the favorite column to `registry`.
    pub fn overlay<R: TableRow + 'static>(
        &self,
        registry: ColumnRegistry<R>,
    ) -> Result<ColumnRegistry<R>> {
        let mut columns = Vec::with_capacity(registry.len() + 1);
        columns.push(self.column());
        columns.extend(registry.into_columns());
        ColumnRegistry::new(columns)
    }
}

/// The favorites feature: the shared set plus its persistence.
pub struct Favorites<S: FavoriteStore> {
    set: FavoriteSet,
    store: S,
}

impl<S: FavoriteStore> Favorites<S> {
    /// Loads the persisted set. Never fails; see [`FavoriteStore::load`].
    pub fn load(store: S) -> Self {
        let set = FavoriteSet::new(store.load());
        debug!(count = set.len(), "favorites loaded");
        Self { set, store }
    }

    pub fn set(&self) -> &FavoriteSet {
        &self.set
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.set.contains(id)
    }

    /// Flips membership of `id` and persists the whole set.
    ///
    /// Returns the new membership. Persistence failures are logged and
    /// otherwise ignored.
    pub fn toggle(&self, id: &str) -> bool {
        let now_favorite = self.set.toggle(id);
        if let Err(e) = self.store.save(&self.set.ids()) {
            warn!(id, error = %e, "failed to persist favorites");
        }
        now_favorite
    }
}
