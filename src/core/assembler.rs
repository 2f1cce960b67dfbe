//! Page assembly pipeline.
//!
//! `PageAssembler` reproduces the page-load sequence every page of the site
//! goes through, in one fixed order:
//!
//! 1. Load the header fragment (awaited to settlement)
//! 2. Load the footer fragment (awaited after the header settles)
//! 3. Initialize the theme switcher (needs the header content in place,
//!    which step 1's sequencing guarantees; a missing header makes this a
//!    no-op, never a failure)
//! 4. On pages carrying the catalog container: populate the accordion,
//!    update the counters, and arm the search filter
//!
//! Fragment loading is best-effort throughout: a failed fetch degrades the
//! page and the pipeline keeps going.

use std::fs;
use std::sync::Arc;
use tracing::{info, warn};

use super::config::Config;
use super::error::Result;
use crate::dom::{Document, ACCORDION_SLOT, FOOTER_SLOT, HEADER_SLOT};
use crate::domains::catalog::{build_view, populate_tools, CatalogRegistry};
use crate::domains::fragments::{FragmentFetcher, FragmentLoader, HttpFragmentFetcher};
use crate::domains::search::SearchFilter;
use crate::domains::theme::{FilePreferenceStore, PreferenceStore, Theme, ThemeSwitcher};

/// The outcome of assembling one document.
#[derive(Debug)]
pub struct AssemblyReport {
    /// Whether the header fragment landed in its slot.
    pub header_loaded: bool,

    /// Whether the footer fragment landed in its slot.
    pub footer_loaded: bool,

    /// The active theme, when theme controls were discovered.
    pub theme: Option<Theme>,

    /// Total tool count, when the document carried the catalog container.
    pub tool_count: Option<usize>,

    /// The armed search filter, when the catalog was populated and the
    /// search input exists.
    pub search: Option<SearchFilter>,
}

/// Assembles documents by running the fixed page-load pipeline.
pub struct PageAssembler {
    config: Arc<Config>,
    loader: FragmentLoader,
    catalog: CatalogRegistry,
}

impl PageAssembler {
    /// Create an assembler using the full authored catalog.
    pub fn new(config: Arc<Config>, fetcher: Arc<dyn FragmentFetcher>) -> Self {
        Self {
            config,
            loader: FragmentLoader::new(fetcher),
            catalog: CatalogRegistry::new(),
        }
    }

    /// Replace the catalog. Used by tests to assemble against fixtures.
    pub fn with_catalog(mut self, catalog: CatalogRegistry) -> Self {
        self.catalog = catalog;
        self
    }

    /// Run the page-load pipeline over `doc`.
    pub async fn assemble(
        &self,
        doc: &mut Document,
        store: &mut dyn PreferenceStore,
    ) -> AssemblyReport {
        // The two fragment loads are sequential on purpose: theme setup
        // below requires the header load to have settled first.
        let header_loaded = self
            .loader
            .load_component(&self.config.components.header_path, HEADER_SLOT, doc)
            .await;
        let footer_loaded = self
            .loader
            .load_component(&self.config.components.footer_path, FOOTER_SLOT, doc)
            .await;

        let theme = match ThemeSwitcher::discover(doc) {
            Some(switcher) => {
                Some(switcher.initialize(doc, store, self.config.theme.default_theme))
            }
            None => {
                info!("No theme controls in header; theme setup skipped");
                None
            }
        };

        let mut tool_count = None;
        let mut search = None;
        if doc.has_slot(ACCORDION_SLOT) {
            let sections = build_view(&self.catalog);
            tool_count = Some(populate_tools(doc, &sections));

            if doc.has_search_input() {
                search = Some(SearchFilter::new(sections));
            } else {
                warn!("Catalog container present but no search input; search disabled");
            }
        }

        AssemblyReport {
            header_loaded,
            footer_loaded,
            theme,
            tool_count,
            search,
        }
    }
}

/// Summary of a full site assembly run.
#[derive(Debug)]
pub struct SiteSummary {
    /// Number of pages written to the output directory.
    pub pages_written: usize,

    /// Total tool count rendered on the homepage.
    pub tool_count: usize,

    /// The theme active during assembly, when one was initialized.
    pub theme: Option<Theme>,
}

/// Secondary pages sharing only the header and footer: (title, file name).
const SECONDARY_PAGES: [(&str, &str); 4] = [
    ("About Us", "about.html"),
    ("Contact", "contact.html"),
    ("Privacy Policy", "privacy.html"),
    ("Terms of Service", "terms.html"),
];

/// Assemble the whole site and write it into the configured output
/// directory: the homepage plus the secondary pages.
pub async fn assemble_site(config: Arc<Config>) -> Result<SiteSummary> {
    let fetcher = Arc::new(HttpFragmentFetcher::new(&config.site.base_url));
    let mut store = FilePreferenceStore::open(&config.theme.preferences_path)?;
    let assembler = PageAssembler::new(config.clone(), fetcher);

    fs::create_dir_all(&config.output.dir)?;

    let mut home = Document::home(&config.site.name);
    let report = assembler.assemble(&mut home, &mut store).await;
    if !report.header_loaded || !report.footer_loaded {
        warn!("Site assembled with missing fragments (degraded pages)");
    }
    fs::write(config.output.dir.join("index.html"), home.to_html())?;

    let mut pages_written = 1;
    for (title, file_name) in SECONDARY_PAGES {
        let mut page = Document::page(format!("{} - {}", title, config.site.name));
        assembler.assemble(&mut page, &mut store).await;
        fs::write(config.output.dir.join(file_name), page.to_html())?;
        pages_written += 1;
    }

    info!(
        "Site written to {}: {} pages",
        config.output.dir.display(),
        pages_written
    );

    Ok(SiteSummary {
        pages_written,
        tool_count: report.tool_count.unwrap_or(0),
        theme: report.theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::{Category, Tool};
    use crate::domains::fragments::FragmentError;
    use crate::domains::theme::{MemoryPreferenceStore, THEME_ROOT_ATTR, THEME_STORAGE_KEY};
    use async_trait::async_trait;

    const HEADER_WITH_CONTROLS: &str = r##"
        <nav><ul class="theme-dropdown">
          <li><a class="dropdown-item" href="#" data-theme="default">Default</a></li>
          <li><a class="dropdown-item" href="#" data-theme="dark">Dark</a></li>
        </ul></nav>
    "##;

    /// Serves header markup with theme controls and plain footer markup.
    struct SiteFetcher;

    #[async_trait]
    impl FragmentFetcher for SiteFetcher {
        async fn fetch(&self, path: &str) -> std::result::Result<String, FragmentError> {
            if path.contains("header") {
                Ok(HEADER_WITH_CONTROLS.to_string())
            } else {
                Ok("<footer>footer</footer>".to_string())
            }
        }
    }

    /// Fails header fetches, serves the footer.
    struct HeaderDownFetcher;

    #[async_trait]
    impl FragmentFetcher for HeaderDownFetcher {
        async fn fetch(&self, path: &str) -> std::result::Result<String, FragmentError> {
            if path.contains("header") {
                Err(FragmentError::status(path, 503))
            } else {
                Ok("<footer>footer</footer>".to_string())
            }
        }
    }

    fn fixture_catalog() -> CatalogRegistry {
        CatalogRegistry::from_categories(vec![
            Category::new(
                "C1",
                "bi-one",
                vec![
                    Tool::new("PDF Merger", "bi-files", "tools/c1/pdf-merger.html"),
                    Tool::new("PDF Splitter", "bi-scissors", "tools/c1/pdf-splitter.html"),
                    Tool::new("Word to PDF", "bi-word", "tools/c1/word-to-pdf.html"),
                ],
            ),
            Category::new(
                "C2",
                "bi-two",
                vec![
                    Tool::new("Image Cropper", "bi-crop", "tools/c2/image-cropper.html"),
                    Tool::new("Image Resizer", "bi-aspect-ratio", "tools/c2/image-resizer.html"),
                ],
            ),
        ])
    }

    fn assembler_with(fetcher: Arc<dyn FragmentFetcher>) -> PageAssembler {
        PageAssembler::new(Arc::new(Config::default()), fetcher).with_catalog(fixture_catalog())
    }

    #[tokio::test]
    async fn test_full_homepage_assembly() {
        let assembler = assembler_with(Arc::new(SiteFetcher));
        let mut doc = Document::home("MultiTool Universe");
        let mut store = MemoryPreferenceStore::new();

        let report = assembler.assemble(&mut doc, &mut store).await;

        assert!(report.header_loaded);
        assert!(report.footer_loaded);
        assert_eq!(report.theme, Some(Theme::Default));
        assert_eq!(report.tool_count, Some(5));
        assert!(report.search.is_some());
        assert_eq!(doc.root_attr(THEME_ROOT_ATTR), Some("default"));
        assert_eq!(store.get(THEME_STORAGE_KEY), Some("default".to_string()));
        assert_eq!(doc.text(crate::dom::HERO_COUNTER_ID), Some("5"));
    }

    #[tokio::test]
    async fn test_header_failure_does_not_block_the_rest() {
        let assembler = assembler_with(Arc::new(HeaderDownFetcher));
        let mut doc = Document::home("MultiTool Universe");
        let mut store = MemoryPreferenceStore::new();

        let report = assembler.assemble(&mut doc, &mut store).await;

        assert!(!report.header_loaded);
        // Footer still loads, catalog still populates.
        assert!(report.footer_loaded);
        assert_eq!(report.tool_count, Some(5));
        // No header content means no controls, so theme setup was a no-op.
        assert_eq!(report.theme, None);
        assert_eq!(doc.root_attr(THEME_ROOT_ATTR), None);
        assert_eq!(store.get(THEME_STORAGE_KEY), None);
    }

    #[tokio::test]
    async fn test_generic_page_skips_catalog_and_search() {
        let assembler = assembler_with(Arc::new(SiteFetcher));
        let mut doc = Document::page("About Us");
        let mut store = MemoryPreferenceStore::new();

        let report = assembler.assemble(&mut doc, &mut store).await;

        assert_eq!(report.tool_count, None);
        assert!(report.search.is_none());
        // Theme still runs on every page.
        assert_eq!(report.theme, Some(Theme::Default));
    }

    #[tokio::test]
    async fn test_catalog_without_search_input_skips_arming() {
        let assembler = assembler_with(Arc::new(SiteFetcher));
        let mut doc = Document::home("MultiTool Universe").without_search_input();
        let mut store = MemoryPreferenceStore::new();

        let report = assembler.assemble(&mut doc, &mut store).await;

        // The catalog still renders; only the filter stays unarmed.
        assert_eq!(report.tool_count, Some(5));
        assert!(report.search.is_none());
        assert_eq!(doc.text(crate::dom::HERO_COUNTER_ID), Some("5"));
    }

    #[tokio::test]
    async fn test_persisted_theme_survives_into_assembly() {
        let assembler = assembler_with(Arc::new(SiteFetcher));
        let mut doc = Document::page("Contact");
        let mut store = MemoryPreferenceStore::new();
        store.set(THEME_STORAGE_KEY, "dark").unwrap();

        let report = assembler.assemble(&mut doc, &mut store).await;

        assert_eq!(report.theme, Some(Theme::Dark));
        assert_eq!(doc.root_attr(THEME_ROOT_ATTR), Some("dark"));
    }

    #[tokio::test]
    async fn test_armed_search_filters_assembled_catalog() {
        let assembler = assembler_with(Arc::new(SiteFetcher));
        let mut doc = Document::home("MultiTool Universe");
        let mut store = MemoryPreferenceStore::new();

        let report = assembler.assemble(&mut doc, &mut store).await;
        let mut search = report.search.unwrap();

        search.apply("pdf");
        assert_eq!(search.visible_tools(), 3);
        assert!(!search.sections()[1].visible);

        search.apply("");
        assert_eq!(search.visible_tools(), 5);
    }
}
