//! The explicit page model the domain modules render into.
//!
//! A `Document` stands in for one page of the site. It tracks the pieces of
//! page state that assembly mutates: the
//! root element's attributes (theme), the placeholder slots that receive
//! injected markup (header, footer, catalog accordion), and the text nodes
//! holding the tool counters. `to_html` serializes the assembled state into
//! a complete page.

use chrono::Utc;
use std::collections::BTreeMap;

/// Placeholder element id for the shared header fragment.
pub const HEADER_SLOT: &str = "header-placeholder";

/// Placeholder element id for the shared footer fragment.
pub const FOOTER_SLOT: &str = "footer-placeholder";

/// Container element id for the catalog accordion. Only present on the
/// homepage; its presence gates catalog rendering and search.
pub const ACCORDION_SLOT: &str = "toolsAccordion";

/// Element id of the live search input on the homepage.
pub const SEARCH_INPUT_ID: &str = "search-input";

/// Text node id of the tool counter in the hero section.
pub const HERO_COUNTER_ID: &str = "tool-count-hero";

/// Text node id of the tool counter near the footer.
pub const FOOTER_COUNTER_ID: &str = "tool-count-footer";

/// The kind of page a document represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The homepage, carrying the catalog container and search input.
    Home,

    /// Any secondary page sharing only the header and footer.
    Generic,
}

/// One page of the site, modeled as explicit state.
#[derive(Debug, Clone)]
pub struct Document {
    kind: PageKind,
    title: String,
    root_attrs: BTreeMap<String, String>,
    slots: BTreeMap<String, String>,
    texts: BTreeMap<String, String>,
    search_input: bool,
}

impl Document {
    /// Create the homepage document: header/footer slots, the catalog
    /// container, the search input, and both tool counters.
    pub fn home(title: impl Into<String>) -> Self {
        let mut doc = Self::page_with_kind(PageKind::Home, title);
        doc.slots.insert(ACCORDION_SLOT.to_string(), String::new());
        doc.texts.insert(HERO_COUNTER_ID.to_string(), String::new());
        doc.texts
            .insert(FOOTER_COUNTER_ID.to_string(), String::new());
        doc.search_input = true;
        doc
    }

    /// Create a generic page document with only the header and footer slots.
    pub fn page(title: impl Into<String>) -> Self {
        Self::page_with_kind(PageKind::Generic, title)
    }

    /// Drop the search input from the page. Embedded renderings of the
    /// catalog show the accordion without live search.
    pub fn without_search_input(mut self) -> Self {
        self.search_input = false;
        self
    }

    fn page_with_kind(kind: PageKind, title: impl Into<String>) -> Self {
        let mut slots = BTreeMap::new();
        slots.insert(HEADER_SLOT.to_string(), String::new());
        slots.insert(FOOTER_SLOT.to_string(), String::new());

        Self {
            kind,
            title: title.into(),
            root_attrs: BTreeMap::new(),
            slots,
            texts: BTreeMap::new(),
            search_input: false,
        }
    }

    /// The kind of page this document represents.
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// The page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set an attribute on the document root element.
    pub fn set_root_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.root_attrs.insert(name.into(), value.into());
    }

    /// Read an attribute from the document root element.
    pub fn root_attr(&self, name: &str) -> Option<&str> {
        self.root_attrs.get(name).map(String::as_str)
    }

    /// Whether the document carries the given slot.
    pub fn has_slot(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Replace the inner content of a slot. Returns false when the document
    /// has no such slot. Repeated writes simply overwrite prior content.
    pub fn set_slot(&mut self, id: &str, markup: impl Into<String>) -> bool {
        match self.slots.get_mut(id) {
            Some(slot) => {
                *slot = markup.into();
                true
            }
            None => false,
        }
    }

    /// Read the current content of a slot.
    pub fn slot(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(String::as_str)
    }

    /// Replace the content of a text node. Returns false when the document
    /// has no such node.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.texts.get_mut(id) {
            Some(node) => {
                *node = text.into();
                true
            }
            None => false,
        }
    }

    /// Read the current content of a text node.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    /// Whether this page carries the live search input.
    pub fn has_search_input(&self) -> bool {
        self.search_input
    }

    /// Serialize the assembled document into a complete HTML page.
    pub fn to_html(&self) -> String {
        let mut attrs = String::new();
        for (name, value) in &self.root_attrs {
            attrs.push_str(&format!(" {}=\"{}\"", name, value));
        }

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str(&format!("<html lang=\"en\"{}>\n", attrs));
        out.push_str("<head>\n");
        out.push_str("    <meta charset=\"utf-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        out.push_str(&format!("    <title>{}</title>\n", self.title));
        out.push_str(&format!(
            "    <!-- assembled {} -->\n",
            Utc::now().to_rfc3339()
        ));
        out.push_str("</head>\n<body>\n");
        out.push_str(&self.slot_div(HEADER_SLOT));

        out.push_str("<main class=\"container\">\n");
        if self.kind == PageKind::Home {
            out.push_str("<section class=\"hero text-center\">\n");
            out.push_str(&format!("    <h1>{}</h1>\n", self.title));
            out.push_str(&format!(
                "    <p><span id=\"{}\">{}</span> free tools, all in one place.</p>\n",
                HERO_COUNTER_ID,
                self.text(HERO_COUNTER_ID).unwrap_or_default()
            ));
            out.push_str(&format!(
                "    <input id=\"{}\" type=\"search\" class=\"form-control\" placeholder=\"Search tools...\">\n",
                SEARCH_INPUT_ID
            ));
            out.push_str("</section>\n");
            out.push_str(&format!(
                "<div class=\"accordion\" id=\"{}\">{}</div>\n",
                ACCORDION_SLOT,
                self.slot(ACCORDION_SLOT).unwrap_or_default()
            ));
        }
        out.push_str("</main>\n");

        out.push_str(&self.slot_div(FOOTER_SLOT));
        if self.kind == PageKind::Home {
            out.push_str(&format!(
                "<p class=\"text-center\"><span id=\"{}\">{}</span> tools and counting.</p>\n",
                FOOTER_COUNTER_ID,
                self.text(FOOTER_COUNTER_ID).unwrap_or_default()
            ));
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    fn slot_div(&self, id: &str) -> String {
        format!(
            "<div id=\"{}\">{}</div>\n",
            id,
            self.slot(id).unwrap_or_default()
        )
    }
}
