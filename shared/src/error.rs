pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("stored catalog is not a plant list: {0}")]
    CatalogFormat(#[from] serde_json::Error),
    #[error("plant name is required")]
    MissingName,
    #[error("plant width must be a positive number of meters, got {0:?}")]
    InvalidWidth(String),
    #[error("plant color must look like #rrggbb, got {0:?}")]
    InvalidColor(String),
}
