//! Fragment loading and injection.
//!
//! `FragmentLoader` retrieves a shared markup fragment and replaces the
//! inner content of the matching document slot. Failures are logged and
//! swallowed: a page without its header must still become a page.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use super::error::FragmentError;
use crate::dom::Document;

/// Root-relative path of the shared header fragment.
pub const HEADER_COMPONENT: &str = "/components/header.html";

/// Root-relative path of the shared footer fragment.
pub const FOOTER_COMPONENT: &str = "/components/footer.html";

/// Retrieves fragment markup by root-relative path.
///
/// The seam exists so that assembly can be exercised without a network:
/// tests substitute static or failing fetchers for the HTTP implementation.
#[async_trait]
pub trait FragmentFetcher: Send + Sync {
    /// Fetch the fragment at the given root-relative path.
    async fn fetch(&self, path: &str) -> Result<String, FragmentError>;
}

/// Fetches fragments over HTTP, resolving paths against the site base URL.
pub struct HttpFragmentFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFragmentFetcher {
    /// Create a fetcher resolving against the given base URL. An empty base
    /// URL means the site is hosted at a domain root.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FragmentFetcher for HttpFragmentFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FragmentError::status(path, response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

/// Loads fragments into document slots, best-effort.
pub struct FragmentLoader {
    fetcher: Arc<dyn FragmentFetcher>,
}

impl FragmentLoader {
    /// Create a loader backed by the given fetcher.
    pub fn new(fetcher: Arc<dyn FragmentFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch the fragment at `path` and replace the inner content of the
    /// slot identified by `slot_id`.
    ///
    /// Returns whether the slot now holds the fetched markup. Any failure
    /// (transport error, non-success status, unknown slot) is logged and
    /// swallowed so the rest of page assembly continues. Exactly one attempt
    /// is made per call; calling again for the same slot overwrites it.
    pub async fn load_component(&self, path: &str, slot_id: &str, doc: &mut Document) -> bool {
        let outcome = match self.fetcher.fetch(path).await {
            Ok(markup) => {
                if doc.set_slot(slot_id, markup) {
                    Ok(())
                } else {
                    Err(FragmentError::unknown_slot(slot_id))
                }
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                debug!("Loaded component {} into #{}", path, slot_id);
                true
            }
            Err(e) => {
                error!("Error loading component: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{FOOTER_SLOT, HEADER_SLOT};

    /// A fetcher serving fixed markup for every path.
    struct StaticFetcher(String);

    #[async_trait]
    impl FragmentFetcher for StaticFetcher {
        async fn fetch(&self, _path: &str) -> Result<String, FragmentError> {
            Ok(self.0.clone())
        }
    }

    /// A fetcher that fails for paths containing the given needle.
    struct FailingFetcher {
        fail_on: String,
        markup: String,
    }

    #[async_trait]
    impl FragmentFetcher for FailingFetcher {
        async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
            if path.contains(&self.fail_on) {
                Err(FragmentError::status(path, 404))
            } else {
                Ok(self.markup.clone())
            }
        }
    }

    #[tokio::test]
    async fn test_load_component_injects_markup() {
        let loader = FragmentLoader::new(Arc::new(StaticFetcher("<nav>top</nav>".to_string())));
        let mut doc = Document::page("About");

        assert!(
            loader
                .load_component(HEADER_COMPONENT, HEADER_SLOT, &mut doc)
                .await
        );
        assert_eq!(doc.slot(HEADER_SLOT), Some("<nav>top</nav>"));
    }

    #[tokio::test]
    async fn test_load_component_failure_leaves_slot_untouched() {
        let loader = FragmentLoader::new(Arc::new(FailingFetcher {
            fail_on: "header".to_string(),
            markup: String::new(),
        }));
        let mut doc = Document::page("About");

        assert!(
            !loader
                .load_component(HEADER_COMPONENT, HEADER_SLOT, &mut doc)
                .await
        );
        assert_eq!(doc.slot(HEADER_SLOT), Some(""));
    }

    #[tokio::test]
    async fn test_load_component_unknown_slot_is_swallowed() {
        let loader = FragmentLoader::new(Arc::new(StaticFetcher("<aside></aside>".to_string())));
        let mut doc = Document::page("About");

        assert!(
            !loader
                .load_component("/components/sidebar.html", "sidebar-placeholder", &mut doc)
                .await
        );
    }

    #[tokio::test]
    async fn test_load_component_overwrites_on_repeat() {
        let mut doc = Document::page("About");

        let first = FragmentLoader::new(Arc::new(StaticFetcher("<footer>v1</footer>".to_string())));
        first
            .load_component(FOOTER_COMPONENT, FOOTER_SLOT, &mut doc)
            .await;

        let second =
            FragmentLoader::new(Arc::new(StaticFetcher("<footer>v2</footer>".to_string())));
        second
            .load_component(FOOTER_COMPONENT, FOOTER_SLOT, &mut doc)
            .await;

        assert_eq!(doc.slot(FOOTER_SLOT), Some("<footer>v2</footer>"));
    }
}
