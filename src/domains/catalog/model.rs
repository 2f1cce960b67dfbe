//! Catalog data types.

use serde::{Deserialize, Serialize};

/// One standalone utility tool hosted by the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Display name, also the match key source for search.
    pub name: String,

    /// Symbolic icon identifier (a Bootstrap Icons class).
    pub icon: String,

    /// Site-relative path of the tool's page.
    pub url: String,
}

impl Tool {
    /// Create a tool entry.
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            url: url.into(),
        }
    }
}

/// One category of tools. Identity is the display name, which may carry
/// decorative symbols; those are stripped when deriving URL slugs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Display label shown on the accordion header.
    pub name: String,

    /// Symbolic icon identifier for the accordion header.
    pub icon: String,

    /// The category's tools, in authored order.
    pub tools: Vec<Tool>,
}

impl Category {
    /// Create a category with its tools.
    pub fn new(name: impl Into<String>, icon: impl Into<String>, tools: Vec<Tool>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            tools,
        }
    }
}
