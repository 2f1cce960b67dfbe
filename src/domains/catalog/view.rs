//! The renderable view-model derived from the catalog.
//!
//! The transform runs once per page load. Each tool card carries a
//! `match_key` - the lowercased display name - computed here rather than on
//! every keystroke, so the search filter only ever does substring checks.
//! Visibility lives on the view-model; rendering projects it into markup
//! and the filter mutates it in place.

use super::registry::CatalogRegistry;

/// A renderable projection of one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCard {
    /// Display name, case preserved.
    pub name: String,

    /// Lowercased name, the substring-match key for search.
    pub match_key: String,

    /// Icon identifier.
    pub icon: String,

    /// Link target of the card.
    pub url: String,

    /// Whether the card is currently shown.
    pub visible: bool,
}

/// A renderable projection of one category and its cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    /// Category display name.
    pub name: String,

    /// Icon identifier for the section header.
    pub icon: String,

    /// Zero-based position in the accordion.
    pub index: usize,

    /// Whether the section starts expanded. Exactly the first section does.
    pub expanded: bool,

    /// Whether the section is currently shown.
    pub visible: bool,

    /// The section's cards, in authored order.
    pub cards: Vec<ToolCard>,
}

impl CategorySection {
    /// Number of currently visible cards.
    pub fn visible_cards(&self) -> usize {
        self.cards.iter().filter(|card| card.visible).count()
    }
}

/// Build the view-model for the whole catalog.
///
/// Sections come out in registry order; everything starts visible and only
/// the first section starts expanded.
pub fn build_view(registry: &CatalogRegistry) -> Vec<CategorySection> {
    registry
        .categories()
        .iter()
        .enumerate()
        .map(|(index, category)| CategorySection {
            name: category.name.clone(),
            icon: category.icon.clone(),
            index,
            expanded: index == 0,
            visible: true,
            cards: category
                .tools
                .iter()
                .map(|tool| ToolCard {
                    name: tool.name.clone(),
                    match_key: tool.name.to_lowercase(),
                    icon: tool.icon.clone(),
                    url: tool.url.clone(),
                    visible: true,
                })
                .collect(),
        })
        .collect()
}
