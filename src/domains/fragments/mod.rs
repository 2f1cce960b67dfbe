//! Fragments domain module.
//!
//! Every page of the site shares the same header and footer markup. Rather
//! than duplicating it, each page carries placeholder slots and the shared
//! markup is fetched and injected at assembly time. Loading is best-effort:
//! a missing fragment degrades the page, it never blocks assembly.

mod error;
mod loader;

pub use error::FragmentError;
pub use loader::{
    FragmentFetcher, FragmentLoader, HttpFragmentFetcher, FOOTER_COMPONENT, HEADER_COMPONENT,
};
