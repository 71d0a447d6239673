use catalog_core::error::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(String),

    #[error("api not found: {0}")]
    NotFound(u32),

    #[error("unknown category: '{slug}'. Available categories: {available}")]
    UnknownCategory { slug: String, available: String },
}
