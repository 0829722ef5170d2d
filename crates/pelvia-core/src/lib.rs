//! pelvia-core
//!
//! Pure domain types shared by the scoring, rule and export crates.
//! No engine logic lives here.

pub mod error;
pub mod models;
