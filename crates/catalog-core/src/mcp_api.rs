use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{ApiRecord, CatalogFilters, CategorySummary};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchApisParams {
    /// Text matched case-insensitively against API names and descriptions.
    pub query: Option<String>,
    /// Exact category name such as "Animals".
    pub category: Option<String>,
    /// Exact auth scheme such as "None", "API Key" or "OAuth".
    pub auth: Option<String>,
    /// Minimum score (inclusive).
    pub min_score: Option<f64>,
}

impl From<SearchApisParams> for CatalogFilters {
    fn from(params: SearchApisParams) -> Self {
        CatalogFilters {
            search: params.query,
            category: params.category,
            auth: params.auth,
            min_score: params.min_score,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetApiParams {
    /// Numeric API id from search results.
    pub id: u32,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCategoryParams {
    /// Category slug such as "animals" or "open-data".
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApiListResponse {
    pub apis: Vec<ApiRecord>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryDetailResponse {
    pub category: CategorySummary,
    pub apis: Vec<ApiRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuthTypesResponse {
    pub auth_types: Vec<String>,
}
