//! Accordion rendering and document injection.
//!
//! The whole accordion is assembled into one string and written into the
//! catalog container in a single slot write, never incrementally per
//! category. Rendering has no error path: the catalog is authored data,
//! and a malformed entry is a defect to catch in review, not at runtime.

use tracing::info;

use super::view::CategorySection;
use crate::dom::{Document, ACCORDION_SLOT, FOOTER_COUNTER_ID, HERO_COUNTER_ID};

/// Render the accordion markup for all sections.
///
/// Hidden cards and sections render with `display: none` - they stay in the
/// markup so a later filter pass can bring them back.
pub fn render_accordion(sections: &[CategorySection]) -> String {
    let mut html = String::new();

    for section in sections {
        let mut cards = String::new();
        for card in &section.cards {
            cards.push_str(&format!(
                concat!(
                    "<div class=\"col-xl-2 col-lg-3 col-md-4 col-sm-6 tool-item\"",
                    " data-name=\"{name}\"{hidden}>",
                    "<a href=\"{url}\" class=\"tool-card\">",
                    "<i class=\"bi {icon} tool-icon\"></i>",
                    "<span class=\"tool-name\">{name}</span>",
                    "</a></div>"
                ),
                name = card.name,
                icon = card.icon,
                url = card.url,
                hidden = hidden_style(card.visible),
            ));
        }

        html.push_str(&format!(
            concat!(
                "<div class=\"accordion-item\" data-category=\"{name}\"{hidden}>",
                "<h2 class=\"accordion-header\">",
                "<button class=\"accordion-button{collapsed}\" type=\"button\"",
                " data-bs-toggle=\"collapse\" data-bs-target=\"#collapse-{index}\"",
                " aria-expanded=\"{expanded}\" aria-controls=\"collapse-{index}\">",
                "<i class=\"bi {icon} me-3\"></i> {name}",
                "</button></h2>",
                "<div id=\"collapse-{index}\" class=\"accordion-collapse collapse{show}\"",
                " data-bs-parent=\"#{parent}\">",
                "<div class=\"accordion-body\"><div class=\"row g-4\">{cards}</div></div>",
                "</div></div>"
            ),
            name = section.name,
            icon = section.icon,
            index = section.index,
            expanded = section.expanded,
            collapsed = if section.expanded { "" } else { " collapsed" },
            show = if section.expanded { " show" } else { "" },
            hidden = hidden_style(section.visible),
            parent = ACCORDION_SLOT,
            cards = cards,
        ));
    }

    html
}

fn hidden_style(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " style=\"display: none;\""
    }
}

/// Render the catalog into the document's accordion container and update
/// both tool counters. Returns the total tool count.
///
/// Runs once per page load, and only for documents carrying the container.
pub fn populate_tools(doc: &mut Document, sections: &[CategorySection]) -> usize {
    let html = render_accordion(sections);
    doc.set_slot(ACCORDION_SLOT, html);

    let total: usize = sections.iter().map(|s| s.cards.len()).sum();
    doc.set_text(HERO_COUNTER_ID, total.to_string());
    doc.set_text(FOOTER_COUNTER_ID, total.to_string());

    info!(
        "Catalog populated: {} tools across {} categories",
        total,
        sections.len()
    );
    total
}
