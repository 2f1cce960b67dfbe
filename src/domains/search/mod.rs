//! Search domain module.
//!
//! Live filtering of the rendered catalog. Matching is pure substring
//! containment against each card's precomputed lowercase match key - no
//! token splitting, no fuzziness, no separate index.

mod filter;

pub use filter::SearchFilter;
