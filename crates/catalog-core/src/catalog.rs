//! In-memory query layer over the API and category datasets.
//!
//! Both collections are fixed at construction. Every query derives a fresh
//! view; nothing here mutates the loaded records.

use std::collections::BTreeSet;

use crate::model::{ApiRecord, CatalogFilters, CatalogStats, CategoryRecord, CategorySummary};

const NO_AUTH: &str = "None";

#[derive(Debug, Clone, Default)]
pub struct ApiCatalog {
    apis: Vec<ApiRecord>,
    categories: Vec<CategoryRecord>,
}

impl ApiCatalog {
    pub fn new(apis: Vec<ApiRecord>, categories: Vec<CategoryRecord>) -> Self {
        Self { apis, categories }
    }

    pub fn apis(&self) -> &[ApiRecord] {
        &self.apis
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    /// All APIs matching every supplied filter, in dataset order.
    pub fn get_apis(&self, filters: &CatalogFilters) -> Vec<&ApiRecord> {
        let search = supplied(&filters.search).map(str::to_lowercase);
        let category = supplied(&filters.category);
        let auth = supplied(&filters.auth);
        let min_score = filters.min_score.filter(|m| *m != 0.0 && !m.is_nan());

        self.apis
            .iter()
            .filter(|a| {
                search.as_deref().map_or(true, |q| {
                    a.name.to_lowercase().contains(q) || a.description.to_lowercase().contains(q)
                })
            })
            .filter(|a| category.map_or(true, |c| a.category == c))
            .filter(|a| auth.map_or(true, |s| a.auth == s))
            .filter(|a| min_score.map_or(true, |m| a.score >= m))
            .collect()
    }

    pub fn get_api(&self, id: u32) -> Option<&ApiRecord> {
        self.apis.iter().find(|a| a.id == id)
    }

    /// Every category in dataset order, each with its API count (zero included).
    pub fn get_categories(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|cat| self.summarize(cat))
            .collect()
    }

    pub fn get_category_by_slug(&self, slug: &str) -> Option<CategorySummary> {
        self.categories
            .iter()
            .find(|cat| cat.slug == slug)
            .map(|cat| self.summarize(cat))
    }

    pub fn apis_in_category(&self, name: &str) -> Vec<&ApiRecord> {
        self.get_apis(&CatalogFilters::default().category(name))
    }

    /// Distinct auth schemes, sorted ascending.
    pub fn get_auth_types(&self) -> Vec<String> {
        self.apis
            .iter()
            .map(|a| a.auth.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn get_stats(&self) -> CatalogStats {
        let avg_score = if self.apis.is_empty() {
            0
        } else {
            let sum: f64 = self.apis.iter().map(|a| a.score).sum();
            round_half_up(sum / self.apis.len() as f64)
        };

        CatalogStats {
            total_apis: self.apis.len(),
            total_categories: self.categories.len(),
            avg_score,
            no_auth_count: self.apis.iter().filter(|a| a.auth == NO_AUTH).count(),
        }
    }

    fn summarize(&self, category: &CategoryRecord) -> CategorySummary {
        CategorySummary {
            category: category.clone(),
            count: self
                .apis
                .iter()
                .filter(|a| a.category == category.name)
                .count(),
        }
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// Halves go toward +inf: 2.5 -> 3, -2.5 -> -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
