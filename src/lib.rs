//! MultiTool Site Engine
//!
//! This crate assembles the MultiTool Universe directory site: a homepage
//! listing many small standalone tools grouped into categories, plus a set
//! of secondary pages that share the same header and footer.
//!
//! # Architecture
//!
//! The engine is organized into the following modules:
//!
//! - **core**: Shared infrastructure including configuration, error handling,
//!   and the page assembler that drives the fixed initialization order
//! - **dom**: The explicit document model that stands in for the rendered
//!   page (root attributes, named slots, text nodes)
//! - **domains**: Site behavior organized by bounded contexts
//!   - **fragments**: Fetching and injecting shared header/footer markup
//!   - **theme**: The persisted theme preference and its switcher
//!   - **catalog**: The authored tool catalog and its accordion rendering
//!   - **search**: Live substring filtering over the rendered catalog
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use multitool_site::core::{assemble_site, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let summary = assemble_site(Arc::new(config)).await?;
//!     println!("{} pages written", summary.pages_written);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod dom;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{AssemblyReport, Config, Error, PageAssembler, Result};
pub use crate::dom::Document;
