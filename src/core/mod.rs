//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the site
//! engine, including error handling, configuration, and the page assembler
//! that coordinates the domain modules in their required order.

pub mod assembler;
pub mod config;
pub mod error;

pub use assembler::{assemble_site, AssemblyReport, PageAssembler, SiteSummary};
pub use config::Config;
pub use error::{Error, Result};
