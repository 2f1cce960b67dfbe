//! The closed set of theme identifiers.
//!
//! Identifiers found on controls or in storage are resolved against this
//! set; anything unrecognized resolves to the fallback theme instead of
//! being applied verbatim, so a stale or mistyped identifier can never pin
//! the site to a presentation no stylesheet defines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known storage key holding the active theme identifier.
pub const THEME_STORAGE_KEY: &str = "multiToolTheme";

/// Root element attribute driving all theme-dependent presentation.
pub const THEME_ROOT_ATTR: &str = "data-theme";

/// A visual presentation variant of the site.
///
/// The set mirrors the variants the site's stylesheet defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The stock presentation, also the fallback for unknown identifiers.
    Default,
    Dark,
    Light,
    Ocean,
}

impl Theme {
    /// Every valid theme, in presentation order.
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Dark, Theme::Light, Theme::Ocean];

    /// The string identifier carried on controls and in storage.
    pub fn identifier(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Ocean => "ocean",
        }
    }

    /// Strictly parse an identifier, yielding `None` for unknown values.
    pub fn parse_identifier(identifier: &str) -> Option<Theme> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.identifier() == identifier)
    }

    /// Resolve an identifier, falling back to [`Theme::Default`] for
    /// unknown values.
    pub fn from_identifier(identifier: &str) -> Theme {
        Self::parse_identifier(identifier).unwrap_or(Theme::Default)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Default
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
