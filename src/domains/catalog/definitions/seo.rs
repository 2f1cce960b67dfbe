//! SEO & webmaster tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "📈 SEO & Webmaster Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-graph-up-arrow",
        vec![
            tool("Meta Tag Generator", "bi-tags-fill", "meta-tag-generator.html"),
            tool("Keyword Density", "bi-body-text", "keyword-density-checker.html"),
            tool("Sitemap Generator", "bi-diagram-3-fill", "sitemap-generator.html"),
            tool("Sitemap Validator", "bi-check-circle-fill", "sitemap-validator.html"),
            tool("Robots.txt Generator", "bi-file-text-fill", "robots-txt-generator.html"),
            tool("Google Index Checker", "bi-google", "google-index-checker.html"),
            tool("Domain Authority", "bi-bar-chart-line-fill", "domain-authority-checker.html"),
            tool("Backlink Checker", "bi-link", "backlink-checker.html"),
            tool("Page Speed Checker", "bi-speedometer", "page-speed-checker.html"),
            tool("Mobile-Friendly Test", "bi-phone-fill", "mobile-friendly-test.html"),
        ],
    )
}
