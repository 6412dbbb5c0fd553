use crate::table::TableRow;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category. Unknown values are kept verbatim in `Other` so that a
/// catalog with a new category still loads and renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Home,
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Home,
    ];

    /// The wire value (`electronics`, `clothing`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Books => "books",
            Category::Home => "home",
            Category::Other(raw) => raw,
        }
    }

    /// Human label. Unknown categories fall back to their raw value.
    pub fn label(&self) -> &str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Home => "Home",
            Category::Other(raw) => raw,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "electronics" => Category::Electronics,
            "clothing" => Category::Clothing,
            "books" => Category::Books,
            "home" => Category::Home,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub price: f64,
    /// Informational only; favorite membership comes from the favorite store.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<Category>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            price,
            is_favorite: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl TableRow for Product {
    fn row_id(&self) -> &str {
        &self.id
    }
}
