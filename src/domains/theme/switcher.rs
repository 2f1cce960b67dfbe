//! Theme switcher: control discovery, initialization, and selection.
//!
//! The switcher runs once per page, after the header fragment has settled,
//! because the theme controls live inside the header markup. Discovery
//! scans the injected markup for elements carrying a `data-theme`
//! attribute; when none are found the switcher simply does not exist for
//! that page and theme setup is a no-op.
//!
//! Applying a theme is split in two: a pure step producing a description of
//! the side effects, and a commit step executing them against the document
//! and the preference store.

use regex::Regex;
use tracing::{info, warn};

use super::model::{Theme, THEME_ROOT_ATTR, THEME_STORAGE_KEY};
use super::store::PreferenceStore;
use crate::dom::{Document, HEADER_SLOT};

/// One theme-selection control discovered in the header markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeControl {
    /// The raw identifier the control carries.
    pub identifier: String,
}

/// The side effects of applying a theme.
///
/// Produced by the pure [`ThemeSwitcher::apply`] step and executed by the
/// commit step. Both writes carry the same identifier: the root attribute
/// drives presentation, the persisted value pins the choice across pages
/// and reloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEffects {
    /// Attribute write against the document root: (name, value).
    pub root_attr: (&'static str, String),

    /// Write against the preference store: (key, value).
    pub persist: (&'static str, String),
}

/// The per-page theme switcher.
pub struct ThemeSwitcher {
    controls: Vec<ThemeControl>,
}

impl ThemeSwitcher {
    /// Discover theme controls in the document's header slot.
    ///
    /// Returns `None` when the header is absent, failed to load, or carries
    /// no controls; in that case theme setup must be skipped entirely.
    pub fn discover(doc: &Document) -> Option<Self> {
        let header = doc.slot(HEADER_SLOT)?;
        let pattern = Regex::new(r#"data-theme="([^"]*)""#).ok()?;

        let controls: Vec<ThemeControl> = pattern
            .captures_iter(header)
            .map(|capture| ThemeControl {
                identifier: capture[1].to_string(),
            })
            .collect();

        if controls.is_empty() {
            return None;
        }

        Some(Self { controls })
    }

    /// The discovered controls, in markup order.
    pub fn controls(&self) -> &[ThemeControl] {
        &self.controls
    }

    /// Pure apply step: the side effects of activating `theme`.
    pub fn apply(theme: Theme) -> ThemeEffects {
        let identifier = theme.identifier().to_string();
        ThemeEffects {
            root_attr: (THEME_ROOT_ATTR, identifier.clone()),
            persist: (THEME_STORAGE_KEY, identifier),
        }
    }

    /// Resolve the persisted preference (absent -> `fallback`) and apply it.
    ///
    /// A first-ever visit is pinned explicitly: the resolved theme is
    /// written back to the store even when nothing was persisted before.
    /// Applying the same theme twice leaves identical state.
    pub fn initialize(
        &self,
        doc: &mut Document,
        store: &mut dyn PreferenceStore,
        fallback: Theme,
    ) -> Theme {
        let theme = store
            .get(THEME_STORAGE_KEY)
            .map(|saved| Theme::from_identifier(&saved))
            .unwrap_or(fallback);

        Self::commit(Self::apply(theme), doc, store);
        info!("Theme initialized: {}", theme);
        theme
    }

    /// Activate the theme a control carries. Unknown identifiers resolve to
    /// the default theme rather than landing on the root verbatim.
    pub fn select(
        &self,
        identifier: &str,
        doc: &mut Document,
        store: &mut dyn PreferenceStore,
    ) -> Theme {
        let theme = Theme::from_identifier(identifier);
        Self::commit(Self::apply(theme), doc, store);
        info!("Theme selected: {}", theme);
        theme
    }

    /// Execute theme effects against the document and the store.
    ///
    /// A failed persist keeps the applied root attribute: the current page
    /// stays themed, only the cross-page pin is lost.
    fn commit(effects: ThemeEffects, doc: &mut Document, store: &mut dyn PreferenceStore) {
        let (attr, value) = effects.root_attr;
        doc.set_root_attr(attr, value);

        let (key, value) = effects.persist;
        if let Err(e) = store.set(key, &value) {
            warn!("Failed to persist theme preference: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::theme::store::MemoryPreferenceStore;

    const HEADER_MARKUP: &str = r##"
        <nav class="navbar">
          <ul class="theme-dropdown">
            <li><a class="dropdown-item" href="#" data-theme="default">Default</a></li>
            <li><a class="dropdown-item" href="#" data-theme="dark">Dark</a></li>
            <li><a class="dropdown-item" href="#" data-theme="light">Light</a></li>
            <li><a class="dropdown-item" href="#" data-theme="ocean">Ocean</a></li>
          </ul>
        </nav>
    "##;

    fn doc_with_header() -> Document {
        let mut doc = Document::home("MultiTool Universe");
        doc.set_slot(HEADER_SLOT, HEADER_MARKUP);
        doc
    }

    #[test]
    fn test_discover_finds_all_controls() {
        let doc = doc_with_header();
        let switcher = ThemeSwitcher::discover(&doc).unwrap();
        let identifiers: Vec<&str> = switcher
            .controls()
            .iter()
            .map(|c| c.identifier.as_str())
            .collect();
        assert_eq!(identifiers, vec!["default", "dark", "light", "ocean"]);
    }

    #[test]
    fn test_discover_without_controls_is_none() {
        let mut doc = Document::home("MultiTool Universe");
        doc.set_slot(HEADER_SLOT, "<nav>no dropdown here</nav>");
        assert!(ThemeSwitcher::discover(&doc).is_none());
    }

    #[test]
    fn test_discover_on_empty_header_is_none() {
        let doc = Document::home("MultiTool Universe");
        assert!(ThemeSwitcher::discover(&doc).is_none());
    }

    #[test]
    fn test_apply_describes_both_writes() {
        let effects = ThemeSwitcher::apply(Theme::Dark);
        assert_eq!(effects.root_attr, (THEME_ROOT_ATTR, "dark".to_string()));
        assert_eq!(effects.persist, (THEME_STORAGE_KEY, "dark".to_string()));
    }

    #[test]
    fn test_initialize_first_visit_pins_fallback() {
        let mut doc = doc_with_header();
        let mut store = MemoryPreferenceStore::new();
        let switcher = ThemeSwitcher::discover(&doc).unwrap();

        let theme = switcher.initialize(&mut doc, &mut store, Theme::Default);

        assert_eq!(theme, Theme::Default);
        assert_eq!(doc.root_attr(THEME_ROOT_ATTR), Some("default"));
        assert_eq!(store.get(THEME_STORAGE_KEY), Some("default".to_string()));
    }

    #[test]
    fn test_initialize_uses_persisted_value() {
        let mut doc = doc_with_header();
        let mut store = MemoryPreferenceStore::new();
        store.set(THEME_STORAGE_KEY, "ocean").unwrap();
        let switcher = ThemeSwitcher::discover(&doc).unwrap();

        let theme = switcher.initialize(&mut doc, &mut store, Theme::Default);

        assert_eq!(theme, Theme::Ocean);
        assert_eq!(doc.root_attr(THEME_ROOT_ATTR), Some("ocean"));
    }

    #[test]
    fn test_initialize_unknown_persisted_value_falls_back() {
        let mut doc = doc_with_header();
        let mut store = MemoryPreferenceStore::new();
        store.set(THEME_STORAGE_KEY, "neon").unwrap();
        let switcher = ThemeSwitcher::discover(&doc).unwrap();

        let theme = switcher.initialize(&mut doc, &mut store, Theme::Default);

        assert_eq!(theme, Theme::Default);
        assert_eq!(store.get(THEME_STORAGE_KEY), Some("default".to_string()));
    }

    #[test]
    fn test_select_applies_and_persists() {
        let mut doc = doc_with_header();
        let mut store = MemoryPreferenceStore::new();
        let switcher = ThemeSwitcher::discover(&doc).unwrap();

        let theme = switcher.select("light", &mut doc, &mut store);

        assert_eq!(theme, Theme::Light);
        assert_eq!(doc.root_attr(THEME_ROOT_ATTR), Some("light"));
        assert_eq!(store.get(THEME_STORAGE_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut doc = doc_with_header();
        let mut store = MemoryPreferenceStore::new();
        let switcher = ThemeSwitcher::discover(&doc).unwrap();

        switcher.select("dark", &mut doc, &mut store);
        let attr_once = doc.root_attr(THEME_ROOT_ATTR).map(str::to_string);
        let stored_once = store.get(THEME_STORAGE_KEY);

        switcher.select("dark", &mut doc, &mut store);
        assert_eq!(doc.root_attr(THEME_ROOT_ATTR).map(str::to_string), attr_once);
        assert_eq!(store.get(THEME_STORAGE_KEY), stored_once);
    }

    #[test]
    fn test_select_unknown_identifier_falls_back() {
        let mut doc = doc_with_header();
        let mut store = MemoryPreferenceStore::new();
        let switcher = ThemeSwitcher::discover(&doc).unwrap();

        let theme = switcher.select("hotdog-stand", &mut doc, &mut store);

        assert_eq!(theme, Theme::Default);
        assert_eq!(doc.root_attr(THEME_ROOT_ATTR), Some("default"));
    }
}
