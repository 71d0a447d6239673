//! Dataset consistency checks.
//!
//! The catalog trusts its data source: ids, names and slugs are expected to be
//! unique and every API is expected to name a known category. Nothing rejects a
//! record that breaks these rules; this module only reports them so the host
//! can log them.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::ApiCatalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateApiId(u32),
    DuplicateCategoryName(String),
    DuplicateCategorySlug(String),
    InvalidSlug(String),
    UnknownCategory { api_id: u32, category: String },
    EmojiMismatch {
        api_id: u32,
        category: String,
        expected: String,
        found: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateApiId(id) => write!(f, "duplicate api id {id}"),
            Self::DuplicateCategoryName(name) => write!(f, "duplicate category name '{name}'"),
            Self::DuplicateCategorySlug(slug) => write!(f, "duplicate category slug '{slug}'"),
            Self::InvalidSlug(slug) => write!(f, "malformed category slug '{slug}'"),
            Self::UnknownCategory { api_id, category } => {
                write!(f, "api {api_id} references unknown category '{category}'")
            }
            Self::EmojiMismatch {
                api_id,
                category,
                expected,
                found,
            } => write!(
                f,
                "api {api_id} carries emoji '{found}' but category '{category}' uses '{expected}'"
            ),
        }
    }
}

fn slug_re() -> &'static Regex {
    static SLUG_RE: OnceLock<Regex> = OnceLock::new();
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"))
}

impl ApiCatalog {
    /// Every invariant violation in the loaded data, in dataset order.
    pub fn integrity_issues(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut seen_ids = HashSet::new();
        for api in self.apis() {
            if !seen_ids.insert(api.id) {
                issues.push(CatalogIssue::DuplicateApiId(api.id));
            }
        }

        let mut emoji_by_name: HashMap<&str, &str> = HashMap::new();
        let mut seen_slugs = HashSet::new();
        for category in self.categories() {
            if emoji_by_name.contains_key(category.name.as_str()) {
                issues.push(CatalogIssue::DuplicateCategoryName(category.name.clone()));
            } else {
                emoji_by_name.insert(category.name.as_str(), category.emoji.as_str());
            }
            if !seen_slugs.insert(category.slug.as_str()) {
                issues.push(CatalogIssue::DuplicateCategorySlug(category.slug.clone()));
            }
            if !slug_re().is_match(&category.slug) {
                issues.push(CatalogIssue::InvalidSlug(category.slug.clone()));
            }
        }

        for api in self.apis() {
            match emoji_by_name.get(api.category.as_str()) {
                None => issues.push(CatalogIssue::UnknownCategory {
                    api_id: api.id,
                    category: api.category.clone(),
                }),
                Some(emoji) if *emoji != api.category_emoji => {
                    issues.push(CatalogIssue::EmojiMismatch {
                        api_id: api.id,
                        category: api.category.clone(),
                        expected: emoji.to_string(),
                        found: api.category_emoji.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{api, category};

    #[test]
    fn clean_catalog_has_no_issues() {
        let catalog = ApiCatalog::new(
            vec![api(1, "Cat Facts", "None", 80.0, "Animals")],
            vec![category("Animals", "🐾", "animals")],
        );
        assert!(catalog.integrity_issues().is_empty());
    }

    #[test]
    fn reports_each_violation() {
        let mut stray = api(3, "Stray", "None", 10.0, "Animals");
        stray.category_emoji = "🐈".to_string();
        let catalog = ApiCatalog::new(
            vec![
                api(1, "Cat Facts", "None", 80.0, "Animals"),
                api(1, "Dog API", "API Key", 90.0, "Pets"),
                stray,
            ],
            vec![
                category("Animals", "🐾", "animals"),
                category("Animals", "🐶", "animals"),
                category("Open Data", "📊", "Open_Data"),
            ],
        );

        let issues = catalog.integrity_issues();
        assert!(issues.contains(&CatalogIssue::DuplicateApiId(1)));
        assert!(issues.contains(&CatalogIssue::DuplicateCategoryName("Animals".to_string())));
        assert!(issues.contains(&CatalogIssue::DuplicateCategorySlug("animals".to_string())));
        assert!(issues.contains(&CatalogIssue::InvalidSlug("Open_Data".to_string())));
        assert!(issues.contains(&CatalogIssue::UnknownCategory {
            api_id: 1,
            category: "Pets".to_string(),
        }));
        assert!(issues.iter().any(|i| matches!(
            i,
            CatalogIssue::EmojiMismatch { api_id: 3, .. }
        )));
    }

    #[test]
    fn issues_render_readably() {
        let issue = CatalogIssue::UnknownCategory {
            api_id: 7,
            category: "Pets".to_string(),
        };
        assert_eq!(issue.to_string(), "api 7 references unknown category 'Pets'");
    }
}
