use std::path::PathBuf;

/// Errors raised while loading the catalog datasets.
///
/// Queries never fail; a miss is an empty result or `None`. Only reading and
/// decoding the JSON files can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog data in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
