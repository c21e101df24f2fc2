//! Foundation types for the SPARQL linter.
//!
//! This crate provides shared types used across the linter, config and CLI crates.
//! It has zero external dependencies, making it suitable as a foundation layer.
//!
//! # Type Categories
//!
//! - **Position types**: [`OffsetRange`], [`Position`], [`Range`], [`LineIndex`]
//! - **Severity types**: [`DiagnosticSeverity`], [`RuleSeverity`]
//! - **Edit types**: [`TextEdit`], [`CodeFix`]

mod edits;
mod position;
mod severity;

pub use edits::{CodeFix, TextEdit};
pub use position::{LineIndex, OffsetRange, Position, Range};
pub use severity::{DiagnosticSeverity, RuleSeverity};
