//! Catalog registry - central registration of all categories.
//!
//! Categories live in `definitions/`, one file per category, and are
//! registered here in a fixed order. That order is significant: it fixes
//! the visual order of the accordion and which category starts expanded
//! (the first one).

use tracing::debug;

use super::definitions;
use super::model::Category;

/// The insertion-ordered set of catalog categories.
pub struct CatalogRegistry {
    categories: Vec<Category>,
}

impl CatalogRegistry {
    /// Create the registry holding the full authored catalog.
    pub fn new() -> Self {
        let registry = Self::from_categories(definitions::all());
        debug!(
            "Catalog registry built: {} categories, {} tools",
            registry.categories.len(),
            registry.total_tools()
        );
        registry
    }

    /// Create a registry from an explicit category list. Order is preserved.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories, in registration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total tool count across all categories.
    pub fn total_tools(&self) -> usize {
        self.categories.iter().map(|c| c.tools.len()).sum()
    }
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::model::Tool;

    #[test]
    fn test_full_catalog_shape() {
        let registry = CatalogRegistry::new();
        assert_eq!(registry.len(), 11);
        assert!(registry.total_tools() > 150);
        // The PDF category leads and therefore starts expanded.
        assert!(registry.categories()[0].name.contains("PDF & Document Tools"));
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let registry = CatalogRegistry::from_categories(vec![
            Category::new("B Tools", "bi-b", vec![]),
            Category::new("A Tools", "bi-a", vec![]),
        ]);
        let names: Vec<&str> = registry
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["B Tools", "A Tools"]);
    }

    #[test]
    fn test_total_tools_sums_categories() {
        let registry = CatalogRegistry::from_categories(vec![
            Category::new(
                "C1",
                "bi-one",
                vec![
                    Tool::new("T1", "bi-t", "tools/c1/t1.html"),
                    Tool::new("T2", "bi-t", "tools/c1/t2.html"),
                ],
            ),
            Category::new("C2", "bi-two", vec![Tool::new("T3", "bi-t", "tools/c2/t3.html")]),
        ]);
        assert_eq!(registry.total_tools(), 3);
    }

    #[test]
    fn test_every_tool_url_is_under_its_category_slug() {
        let registry = CatalogRegistry::new();
        for category in registry.categories() {
            let slug = crate::domains::catalog::slugify(&category.name);
            for tool in &category.tools {
                assert!(
                    tool.url.starts_with(&format!("tools/{}/", slug)),
                    "{} has url {}",
                    tool.name,
                    tool.url
                );
            }
        }
    }
}
