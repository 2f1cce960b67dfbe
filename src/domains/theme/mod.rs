//! Theme domain module.
//!
//! The site ships several visual themes. The active one is a single string
//! identifier: it is persisted under one well-known key so it survives
//! reloads and is shared by every page, and it is applied by setting the
//! `data-theme` attribute on the document root.
//!
//! ## Architecture
//!
//! - `model.rs` - The closed set of theme identifiers
//! - `store.rs` - The injected preference storage capability
//! - `switcher.rs` - Control discovery, initialization, and selection

mod error;
mod model;
mod store;
mod switcher;

pub use error::ThemeError;
pub use model::{Theme, THEME_ROOT_ATTR, THEME_STORAGE_KEY};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use switcher::{ThemeControl, ThemeEffects, ThemeSwitcher};
