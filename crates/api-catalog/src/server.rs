use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::debug;

use crate::error::AppError;
use catalog_core::ApiCatalog;
use catalog_core::mcp_api::{
    ApiListResponse, AuthTypesResponse, CategoryDetailResponse, CategoryListResponse,
    GetApiParams, GetCategoryParams, SearchApisParams,
};
use catalog_core::model::{ApiRecord, CatalogFilters, CatalogStats};

const SITE_TITLE: &str = "Free API Catalog";
const SITE_DESCRIPTION: &str =
    "Curated catalog of free APIs for developers. Search, filter, and discover APIs for your next project.";

#[derive(Clone)]
pub struct ApiCatalogServer {
    catalog: Arc<ApiCatalog>,
    tool_router: ToolRouter<ApiCatalogServer>,
}

impl ApiCatalogServer {
    pub fn new(catalog: Arc<ApiCatalog>) -> Self {
        Self {
            catalog,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl ApiCatalogServer {
    #[tool(description = "Search the API catalog. All filters are optional and combined with AND: query matches name or description case-insensitively, category and auth must match exactly, min_score is inclusive.")]
    async fn search_apis(
        &self,
        Parameters(params): Parameters<SearchApisParams>,
    ) -> Result<Json<ApiListResponse>, String> {
        let filters = CatalogFilters::from(params);
        let apis: Vec<ApiRecord> = self
            .catalog
            .get_apis(&filters)
            .into_iter()
            .cloned()
            .collect();
        debug!(?filters, matches = apis.len(), "search_apis");

        Ok(Json(ApiListResponse {
            total: apis.len(),
            apis,
        }))
    }

    #[tool(description = "Get a single API by its numeric ID.")]
    async fn get_api(
        &self,
        Parameters(params): Parameters<GetApiParams>,
    ) -> Result<Json<ApiRecord>, String> {
        self.catalog
            .get_api(params.id)
            .cloned()
            .map(Json)
            .ok_or_else(|| AppError::NotFound(params.id).to_string())
    }

    #[tool(description = "List all categories in catalog order with the number of APIs in each.")]
    async fn list_categories(&self) -> Result<Json<CategoryListResponse>, String> {
        Ok(Json(CategoryListResponse {
            categories: self.catalog.get_categories(),
        }))
    }

    #[tool(description = "Get a category by slug (e.g. 'animals', 'open-data') together with its APIs.")]
    async fn get_category(
        &self,
        Parameters(params): Parameters<GetCategoryParams>,
    ) -> Result<Json<CategoryDetailResponse>, String> {
        let slug = params.slug.trim().to_string();
        if slug.is_empty() {
            return Err("slug must not be empty".to_string());
        }

        let category = self.catalog.get_category_by_slug(&slug).ok_or_else(|| {
            let available: Vec<&str> = self
                .catalog
                .categories()
                .iter()
                .map(|c| c.slug.as_str())
                .collect();
            AppError::UnknownCategory {
                slug: slug.clone(),
                available: available.join(", "),
            }
            .to_string()
        })?;

        let apis = self
            .catalog
            .apis_in_category(&category.category.name)
            .into_iter()
            .cloned()
            .collect();

        Ok(Json(CategoryDetailResponse { category, apis }))
    }

    #[tool(description = "List the distinct authentication schemes used across the catalog, sorted.")]
    async fn list_auth_types(&self) -> Result<Json<AuthTypesResponse>, String> {
        Ok(Json(AuthTypesResponse {
            auth_types: self.catalog.get_auth_types(),
        }))
    }

    #[tool(description = "Aggregate catalog statistics: total APIs, total categories, average score and the number of APIs needing no auth.")]
    async fn catalog_stats(&self) -> Result<Json<CatalogStats>, String> {
        Ok(Json(self.catalog.get_stats()))
    }
}

#[tool_handler]
impl ServerHandler for ApiCatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "api-catalog".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some(SITE_TITLE.to_string()),
                icons: None,
                website_url: None,
            },
            instructions: Some(format!(
                "{SITE_TITLE} MCP server. {SITE_DESCRIPTION} Use search_apis to filter by text, \
                 category, auth scheme and minimum score, get_api for a specific ID, \
                 list_categories and get_category for browsing, list_auth_types for the auth \
                 facet and catalog_stats for totals."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::model::CategoryRecord;

    fn record(id: u32, name: &str, auth: &str, score: f64, category: &str) -> ApiRecord {
        ApiRecord {
            id,
            name: name.to_string(),
            description: format!("{name} API"),
            url: format!("https://example.com/{id}"),
            auth: auth.to_string(),
            https: true,
            category: category.to_string(),
            category_emoji: "🐾".to_string(),
            score,
            grade: "B".to_string(),
            example_endpoint: None,
        }
    }

    fn server() -> ApiCatalogServer {
        let catalog = ApiCatalog::new(
            vec![
                record(1, "Cat Facts", "None", 80.0, "Animals"),
                record(2, "Dog API", "API Key", 90.0, "Animals"),
            ],
            vec![
                CategoryRecord {
                    name: "Animals".to_string(),
                    emoji: "🐾".to_string(),
                    slug: "animals".to_string(),
                },
                CategoryRecord {
                    name: "Music".to_string(),
                    emoji: "🎵".to_string(),
                    slug: "music".to_string(),
                },
            ],
        );
        ApiCatalogServer::new(Arc::new(catalog))
    }

    #[test]
    fn tools_publish_output_schemas() {
        let tools = ApiCatalogServer::tool_router().list_all();
        for name in [
            "search_apis",
            "get_api",
            "list_categories",
            "get_category",
            "list_auth_types",
            "catalog_stats",
        ] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }

    #[tokio::test]
    async fn search_applies_filters() {
        let Json(response) = server()
            .search_apis(Parameters(SearchApisParams {
                category: Some("Animals".to_string()),
                min_score: Some(85.0),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.apis[0].id, 2);
    }

    #[tokio::test]
    async fn get_api_reports_missing_id() {
        let err = server()
            .get_api(Parameters(GetApiParams { id: 42 }))
            .await
            .err()
            .expect("call should fail");
        assert_eq!(err, "api not found: 42");
    }

    #[tokio::test]
    async fn get_category_lists_its_apis() {
        let Json(response) = server()
            .get_category(Parameters(GetCategoryParams {
                slug: " animals ".to_string(),
            }))
            .await
            .unwrap();
        assert_eq!(response.category.count, 2);
        assert_eq!(response.apis.len(), 2);
    }

    #[tokio::test]
    async fn get_category_rejects_unknown_slug() {
        let err = server()
            .get_category(Parameters(GetCategoryParams {
                slug: "weather".to_string(),
            }))
            .await
            .err()
            .expect("call should fail");
        assert_eq!(
            err,
            "unknown category: 'weather'. Available categories: animals, music"
        );
    }

    #[tokio::test]
    async fn stats_and_auth_types() {
        let server = server();
        let Json(stats) = server.catalog_stats().await.unwrap();
        assert_eq!(stats.avg_score, 85);
        assert_eq!(stats.no_auth_count, 1);

        let Json(auth) = server.list_auth_types().await.unwrap();
        assert_eq!(auth.auth_types, vec!["API Key", "None"]);
    }
}
