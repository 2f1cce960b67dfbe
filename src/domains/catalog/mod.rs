//! Catalog domain module.
//!
//! The catalog is the authored mapping of categories to tools that the
//! homepage renders into a collapsible accordion. It is static data, frozen
//! at build time, never mutated at runtime, and never validated: malformed
//! entries are a review concern, not a runtime condition.
//!
//! ## Architecture
//!
//! - `definitions/` - The authored catalog data, one file per category
//! - `model.rs` - `Category` and `Tool` data types
//! - `slug.rs` - Category display name to URL path segment
//! - `registry.rs` - Insertion-ordered category registry
//! - `view.rs` - The renderable view-model derived from the registry
//! - `render.rs` - Accordion markup generation and document injection

pub mod definitions;
mod model;
mod registry;
mod render;
mod slug;
mod view;

pub use model::{Category, Tool};
pub use registry::CatalogRegistry;
pub use render::{populate_tools, render_accordion};
pub use slug::slugify;
pub use view::{build_view, CategorySection, ToolCard};
