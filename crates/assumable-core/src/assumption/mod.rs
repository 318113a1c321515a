//! The assumption-versus-new-mortgage comparison.
//!
//! `savings` holds the pure calculation, `policy` the product-term
//! conventions it runs under, and `analysis` the reporting envelope that
//! callers (CLI, Node bindings) hand to display surfaces.

pub mod analysis;
pub mod policy;
pub mod savings;
