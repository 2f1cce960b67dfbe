//! Document model module.
//!
//! The site has no live browser DOM; this module provides the explicit
//! document value the domain modules operate on instead: a page title, a
//! root attribute map, named slots for injected markup, and named text
//! nodes for counters.

pub mod document;

pub use document::{
    Document, PageKind, ACCORDION_SLOT, FOOTER_COUNTER_ID, FOOTER_SLOT, HEADER_SLOT,
    HERO_COUNTER_ID, SEARCH_INPUT_ID,
};
