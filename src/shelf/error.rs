use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Failed to fetch products: {0}")]
    Fetch(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Row not found: {0}")]
    RowNotFound(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Invalid table configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
