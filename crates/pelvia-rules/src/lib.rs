//! pelvia-rules
//!
//! Clinical rule engine: the symptom-cluster knowledge base, the matcher that
//! turns symptom ids into suggestions, inference of synthetic symptoms from exam
//! measurements, SMART goal drafting, red flags and label catalogs.
//!
//! Everything here is a pure function over immutable tables, safe to call from
//! any number of threads without coordination.

pub mod catalog;
pub mod clusters;
pub mod engine;
pub mod goals;
pub mod inference;
pub mod red_flags;
