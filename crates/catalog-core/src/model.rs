use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single catalog entry (e.g., "Cat Facts", category "Animals").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecord {
    /// Identifier assigned by the dataset, unique across the catalog
    pub id: u32,
    /// Display name, e.g. "Dog API"
    pub name: String,
    pub description: String,
    /// Documentation or landing page URL
    pub url: String,
    /// Authentication scheme, e.g. "None", "API Key", "OAuth"
    pub auth: String,
    pub https: bool,
    /// Name of the owning category; joins against `CategoryRecord::name`
    pub category: String,
    /// Copy of the owning category's emoji
    pub category_emoji: String,
    /// Quality rating
    pub score: f64,
    /// Letter grade derived from `score` by the dataset
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_endpoint: Option<String>,
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryRecord {
    /// Category key and display value, e.g. "Animals"
    pub name: String,
    pub emoji: String,
    /// Routing identifier, e.g. "animals"
    pub slug: String,
}

/// A category together with the number of APIs filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: CategoryRecord,
    pub count: usize,
}

/// Optional, conjunctive filters for `ApiCatalog::get_apis`.
///
/// Empty strings and a zero (or NaN) `min_score` count as "not supplied".
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilters {
    /// Case-insensitive substring matched against name or description
    #[serde(default)]
    pub search: Option<String>,
    /// Exact category name
    #[serde(default)]
    pub category: Option<String>,
    /// Exact auth scheme
    #[serde(default)]
    pub auth: Option<String>,
    /// Inclusive lower bound on score
    #[serde(default)]
    pub min_score: Option<f64>,
}

impl CatalogFilters {
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    pub fn auth(mut self, auth: impl Into<String>) -> Self {
        self.auth = Some(auth.into());
        self
    }

    pub fn min_score(mut self, score: f64) -> Self {
        self.min_score = Some(score);
        self
    }
}

/// Aggregate figures shown on the catalog landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_apis: usize,
    pub total_categories: usize,
    /// Mean score rounded half toward positive infinity; 0 for an empty catalog
    pub avg_score: i64,
    /// Number of APIs whose auth is exactly "None"
    pub no_auth_count: usize,
}
