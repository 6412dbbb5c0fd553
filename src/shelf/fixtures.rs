//! Test fixtures shared by unit tests and, with the `test_utils` feature,
//! downstream crates.

use crate::model::{Category, Product};

/// The two-product catalog used throughout the tests.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("1", "Mouse", Category::Electronics, 10.0)
            .with_description("Wireless optical mouse"),
        Product::new("2", "Shirt", Category::Clothing, 20.0).with_description("Cotton t-shirt"),
    ]
}

/// A larger catalog spanning every category, with duplicate prices so sort
/// stability is observable.
pub fn catalog() -> Vec<Product> {
    vec![
        Product::new("1", "Mouse", Category::Electronics, 10.0),
        Product::new("2", "Shirt", Category::Clothing, 20.0),
        Product::new("3", "Keyboard", Category::Electronics, 45.5),
        Product::new("4", "Novel", Category::Books, 12.99),
        Product::new("5", "Lamp", Category::Home, 20.0),
        Product::new("6", "Jeans", Category::Clothing, 39.0),
        Product::new("7", "Cookbook", Category::Books, 25.0),
        Product::new("8", "Monitor", Category::Electronics, 199.0),
        Product::new("9", "Mug", Category::Home, 8.0),
        Product::new("10", "Scarf", Category::Clothing, 15.0),
        Product::new("11", "Atlas", Category::Books, 30.0),
        Product::new("12", "Planter", Category::Other("garden".to_string()), 18.0),
    ]
}
