//! # SPARQL Test Utilities
//!
//! Shared test infrastructure for the SPARQL linter crates.
//!
//! ```ignore
//! use sparql_test_utils::{format_diagnostics, fixtures::SELECT_QUERY};
//!
//! #[test]
//! fn test_clean_select() {
//!     let diagnostics = sparql_linter::lint(SELECT_QUERY);
//!     insta::assert_snapshot!(format_diagnostics(SELECT_QUERY, &diagnostics), @"(no diagnostics)");
//! }
//! ```

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]

pub mod assertions;
pub mod fixtures;

pub use assertions::{format_diagnostics, rules_of};

// Re-export insta for snapshot testing
pub use insta;
