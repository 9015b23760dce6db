//! Algorithms over connectivity tables.

pub mod suites;

pub use suites::{SuiteOpts, build_suites, build_suites_with};
