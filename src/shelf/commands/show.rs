use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::favorites::FavoriteSet;
use crate::model::Product;

pub fn run(products: &[Product], favorites: &FavoriteSet, id: &str) -> Result<CmdResult> {
    let product = products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ShelfError::ProductNotFound(id.to_string()))?;

    Ok(CmdResult::default().with_products(vec![Product {
        is_favorite: favorites.contains(id),
        ..product.clone()
    }]))
}
