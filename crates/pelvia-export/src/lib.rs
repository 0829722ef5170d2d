//! pelvia-export
//!
//! Evaluation summaries rendered from Tera templates. Identifiers are resolved
//! to labels here, through an injected [`LabelLookup`](pelvia_rules::catalog::LabelLookup).

pub mod error;
pub mod render;
pub mod summary;
