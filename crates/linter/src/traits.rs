use crate::diagnostics::{LintDiagnostic, LintSeverity};

/// A heuristic check over raw SPARQL query text.
///
/// Rules are stateless unit structs. `check` is a pure function of `source`:
/// equal input yields equal output, in the same order, and it never panics.
/// Every returned range lies within `source` and on `char` boundaries.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule (e.g., `"unclosed_iri"`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Default severity (can be overridden by config)
    fn default_severity(&self) -> LintSeverity;

    /// Scan the full query buffer and report every issue found.
    ///
    /// Diagnostics carry [`LintRule::default_severity`]; overrides are applied
    /// by the caller.
    fn check(&self, source: &str) -> Vec<LintDiagnostic>;
}
