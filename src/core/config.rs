//! Configuration management for the site engine.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::domains::fragments::{FOOTER_COMPONENT, HEADER_COMPONENT};
use crate::domains::theme::Theme;

/// Main configuration structure for the site engine.
///
/// This struct contains all configurable aspects of site assembly, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site identification and hosting metadata.
    pub site: SiteConfig,

    /// Fragments domain configuration.
    pub components: ComponentsConfig,

    /// Theme domain configuration.
    pub theme: ThemeConfig,

    /// Output configuration for assembled pages.
    pub output: OutputConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Site identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// The display name of the site, used as the page title base.
    pub name: String,

    /// The version of the site engine.
    pub version: String,

    /// Base URL the site is hosted under. Fragment paths are resolved
    /// against this value, so the site works at a domain root ("") as well
    /// as under a sub-path (e.g. "https://user.github.io/MultiToolUniverse").
    pub base_url: String,
}

/// Configuration for the fragments domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentsConfig {
    /// Root-relative path of the shared header fragment.
    pub header_path: String,

    /// Root-relative path of the shared footer fragment.
    pub footer_path: String,
}

/// Configuration for the theme domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Location of the preference file backing the theme selection.
    pub preferences_path: PathBuf,

    /// Theme applied when no preference has been persisted yet.
    pub default_theme: Theme,
}

/// Configuration for page output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the assembled pages are written into.
    pub dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                name: "MultiTool Universe".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                base_url: String::new(),
            },
            components: ComponentsConfig {
                header_path: HEADER_COMPONENT.to_string(),
                footer_path: FOOTER_COMPONENT.to_string(),
            },
            theme: ThemeConfig {
                preferences_path: PathBuf::from(".multitool/preferences.json"),
                default_theme: Theme::Default,
            },
            output: OutputConfig {
                dir: PathBuf::from("dist"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `SITE_`.
    /// For example: `SITE_BASE_URL`, `SITE_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("SITE_NAME") {
            config.site.name = name;
        }

        if let Ok(base_url) = std::env::var("SITE_BASE_URL") {
            info!("Resolving fragments against base URL {:?}", base_url);
            config.site.base_url = base_url;
        }

        if let Ok(header_path) = std::env::var("SITE_HEADER_COMPONENT") {
            config.components.header_path = header_path;
        }

        if let Ok(footer_path) = std::env::var("SITE_FOOTER_COMPONENT") {
            config.components.footer_path = footer_path;
        }

        if let Ok(path) = std::env::var("SITE_PREFERENCES_PATH") {
            config.theme.preferences_path = PathBuf::from(path);
        }

        if let Ok(identifier) = std::env::var("SITE_DEFAULT_THEME") {
            match Theme::parse_identifier(&identifier) {
                Some(theme) => config.theme.default_theme = theme,
                None => warn!(
                    "SITE_DEFAULT_THEME {:?} is not a known theme, keeping {:?}",
                    identifier, config.theme.default_theme
                ),
            }
        }

        if let Ok(dir) = std::env::var("SITE_OUTPUT_DIR") {
            config.output.dir = PathBuf::from(dir);
        }

        if let Ok(level) = std::env::var("SITE_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.name, "MultiTool Universe");
        assert_eq!(config.site.base_url, "");
        assert_eq!(config.components.header_path, "/components/header.html");
        assert_eq!(config.components.footer_path, "/components/footer.html");
        assert_eq!(config.theme.default_theme, Theme::Default);
        assert_eq!(config.output.dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("SITE_BASE_URL", "https://example.org/MultiToolUniverse");
        }
        let config = Config::from_env();
        assert_eq!(config.site.base_url, "https://example.org/MultiToolUniverse");
        unsafe {
            std::env::remove_var("SITE_BASE_URL");
        }
    }

    #[test]
    fn test_unknown_default_theme_keeps_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("SITE_DEFAULT_THEME", "neon");
        }
        let config = Config::from_env();
        assert_eq!(config.theme.default_theme, Theme::Default);
        unsafe {
            std::env::remove_var("SITE_DEFAULT_THEME");
        }
    }

    #[test]
    fn test_known_default_theme_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("SITE_DEFAULT_THEME", "dark");
        }
        let config = Config::from_env();
        assert_eq!(config.theme.default_theme, Theme::Dark);
        unsafe {
            std::env::remove_var("SITE_DEFAULT_THEME");
        }
    }
}
