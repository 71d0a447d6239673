use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::ApiCatalog;
use crate::error::CatalogError;
use crate::model::{ApiRecord, CategoryRecord};

/// Read a JSON array of records from disk. Records are taken as-is; no
/// validation beyond deserialization happens here.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_str(&content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

pub fn load_catalog(apis_path: &Path, categories_path: &Path) -> Result<ApiCatalog, CatalogError> {
    let apis: Vec<ApiRecord> = load_records(apis_path)?;
    let categories: Vec<CategoryRecord> = load_records(categories_path)?;
    Ok(ApiCatalog::new(apis, categories))
}
