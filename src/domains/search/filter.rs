//! The live search filter over the catalog view-model.

use tracing::debug;

use crate::domains::catalog::{render_accordion, CategorySection};
use crate::dom::{Document, ACCORDION_SLOT};

/// Filters the rendered catalog in response to search input.
///
/// The filter owns the sections view-model once the catalog has been
/// populated (the "armed" state). Each query pass updates card visibility
/// first and then re-derives each section's visibility from the card state
/// just written, exactly in that order.
#[derive(Debug)]
pub struct SearchFilter {
    sections: Vec<CategorySection>,
}

impl SearchFilter {
    /// Arm the filter over the populated sections.
    pub fn new(sections: Vec<CategorySection>) -> Self {
        Self { sections }
    }

    /// Normalize a raw query: trim surrounding whitespace, lowercase.
    pub fn normalize(query: &str) -> String {
        query.trim().to_lowercase()
    }

    /// Apply a query to the view-model.
    ///
    /// A card is visible iff its match key contains the normalized query as
    /// a substring; the empty query therefore matches every card and fully
    /// resets the view. A section is visible iff it has at least one
    /// visible card.
    pub fn apply(&mut self, query: &str) {
        let term = Self::normalize(query);

        for section in &mut self.sections {
            for card in &mut section.cards {
                card.visible = card.match_key.contains(&term);
            }
        }

        // Section visibility is re-derived from the card state written
        // above, not from any cached count.
        for section in &mut self.sections {
            section.visible = section.cards.iter().any(|card| card.visible);
        }

        debug!(
            "Search applied: {:?} -> {} visible tools",
            term,
            self.visible_tools()
        );
    }

    /// The current view-model state.
    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    /// Number of currently visible cards across all sections.
    pub fn visible_tools(&self) -> usize {
        self.sections.iter().map(|s| s.visible_cards()).sum()
    }

    /// Re-render the filtered view into the document's catalog container.
    pub fn sync(&self, doc: &mut Document) {
        doc.set_slot(ACCORDION_SLOT, render_accordion(&self.sections));
    }
}
