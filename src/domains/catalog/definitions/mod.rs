//! Catalog definitions - the authored category data, one file per category.
//!
//! The order of registration in [`all`] is the accordion's visual order;
//! the first category listed starts expanded. Tool URLs are derived from
//! each category's slug, so moving a tool between categories changes its
//! page folder.

mod calculators;
mod converters;
mod developer;
mod everyday;
mod media;
mod pdf;
mod security;
mod seo;
mod social;
mod student;
mod text;

use super::model::Category;

/// Every authored category, in display order.
pub fn all() -> Vec<Category> {
    vec![
        pdf::category(),
        text::category(),
        media::category(),
        developer::category(),
        seo::category(),
        student::category(),
        calculators::category(),
        converters::category(),
        security::category(),
        social::category(),
        everyday::category(),
    ]
}
