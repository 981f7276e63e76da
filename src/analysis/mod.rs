//! Analysis modules.
//!
//! Derived metrics computed from the audit document before rendering.

pub mod aggregator;

pub use aggregator::*;
