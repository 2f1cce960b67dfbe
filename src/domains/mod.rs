//! Domains module containing site behavior organized by bounded contexts.
//!
//! Each subdomain covers one area of the site's runtime behavior: shared
//! fragment injection, the persisted theme preference, the authored tool
//! catalog, and the live search filter over the rendered catalog.

pub mod catalog;
pub mod fragments;
pub mod search;
pub mod theme;
