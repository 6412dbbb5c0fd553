use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::favorites::{Favorites, STAR_OFF, STAR_ON};
use crate::model::Product;
use crate::store::FavoriteStore;

/// Toggles each id. All ids are resolved before anything is toggled.
pub fn run<S: FavoriteStore, I: AsRef<str>>(
    products: &[Product],
    favorites: &Favorites<S>,
    ids: &[I],
) -> Result<CmdResult> {
    let resolved: Vec<&Product> = ids
        .iter()
        .map(|id| {
            products
                .iter()
                .find(|p| p.id == id.as_ref())
                .ok_or_else(|| ShelfError::ProductNotFound(id.as_ref().to_string()))
        })
        .collect::<Result<_>>()?;

    let mut result = CmdResult::default();
    let mut affected = Vec::with_capacity(resolved.len());
    for product in resolved {
        let now_favorite = favorites.toggle(&product.id);
        let message = if now_favorite {
            format!("{} {} ({}) added to favorites", STAR_ON, product.name, product.id)
        } else {
            format!(
                "{} {} ({}) removed from favorites",
                STAR_OFF, product.name, product.id
            )
        };
        result.add_message(CmdMessage::success(message));
        affected.push(Product {
            is_favorite: now_favorite,
            ..product.clone()
        });
    }
    Ok(result.with_products(affected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_products;
    use crate::store::memory::MemFavoriteStore;

    #[test]
    fn toggles_and_reports() {
        let favorites = Favorites::load(MemFavoriteStore::new());
        let result = run(&sample_products(), &favorites, &["2"]).unwrap();
        assert!(favorites.is_favorite("2"));
        assert!(result.products[0].is_favorite);
        assert!(result.messages[0].content.contains("added"));

        let result = run(&sample_products(), &favorites, &["2"]).unwrap();
        assert!(!favorites.is_favorite("2"));
        assert!(result.messages[0].content.contains("removed"));
    }

    #[test]
    fn persists_full_set() {
        let favorites = Favorites::load(MemFavoriteStore::new());
        run(&sample_products(), &favorites, &["2", "1"]).unwrap();
        assert_eq!(
            favorites.store().load(),
            vec!["1".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn unknown_id_toggles_nothing() {
        let favorites = Favorites::load(MemFavoriteStore::new());
        let err = run(&sample_products(), &favorites, &["1", "99"]).unwrap_err();
        assert!(matches!(err, ShelfError::ProductNotFound(_)));
        assert!(!favorites.is_favorite("1"));
    }

    #[test]
    fn write_failure_is_not_an_error() {
        let store = MemFavoriteStore::new();
        store.set_simulate_write_error(true);
        let favorites = Favorites::load(store);
        let result = run(&sample_products(), &favorites, &["1"]).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(favorites.is_favorite("1"));
    }
}
