use std::path::{Path, PathBuf};

use crate::error::AppError;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_APIS_FILE: &str = "apis.json";
const DEFAULT_CATEGORIES_FILE: &str = "categories.json";

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the catalog datasets.
    pub data_dir: String,
    /// File name of the API dataset inside `data_dir`.
    pub apis_file: String,
    /// File name of the category dataset inside `data_dir`.
    pub categories_file: String,
}

impl Config {
    /// Optional:
    /// - `API_CATALOG_DATA_DIR` (default: "data")
    /// - `API_CATALOG_APIS_FILE` (default: "apis.json")
    /// - `API_CATALOG_CATEGORIES_FILE` (default: "categories.json")
    pub fn from_env() -> Result<Self, AppError> {
        let data_dir =
            std::env::var("API_CATALOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let apis_file = std::env::var("API_CATALOG_APIS_FILE")
            .unwrap_or_else(|_| DEFAULT_APIS_FILE.to_string());
        let categories_file = std::env::var("API_CATALOG_CATEGORIES_FILE")
            .unwrap_or_else(|_| DEFAULT_CATEGORIES_FILE.to_string());

        Self::new(data_dir, apis_file, categories_file)
    }

    pub fn new(
        data_dir: String,
        apis_file: String,
        categories_file: String,
    ) -> Result<Self, AppError> {
        let config = Self {
            data_dir,
            apis_file,
            categories_file,
        };

        for file in [config.apis_path(), config.categories_path()] {
            if !file.exists() {
                return Err(AppError::Config(format!(
                    "required file not found: {}",
                    file.display()
                )));
            }
        }

        Ok(config)
    }

    pub fn apis_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.apis_file)
    }

    pub fn categories_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.categories_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_data_dir() -> String {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../data")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn resolves_shipped_data() {
        let config = Config::new(
            shipped_data_dir(),
            DEFAULT_APIS_FILE.to_string(),
            DEFAULT_CATEGORIES_FILE.to_string(),
        )
        .expect("shipped data should resolve");
        assert!(config.apis_path().ends_with("apis.json"));
        assert!(config.categories_path().ends_with("categories.json"));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = Config::new(
            shipped_data_dir(),
            DEFAULT_APIS_FILE.to_string(),
            "nope.json".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("nope.json"));
    }
}
