use crate::diagnostics::{LintDiagnostic, LintSeverity, OffsetRange};
use crate::traits::LintRule;
use regex::Regex;
use std::sync::LazyLock;

static SELECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSELECT\b").expect("valid select regex"));

static WHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bWHERE\b").expect("valid where regex"));

/// Lint rule that warns about a `SELECT` with no `WHERE` anywhere in the text
///
/// SPARQL allows `SELECT * { ... }` without the keyword; that form is
/// reported too.
pub struct SelectWithoutWhereRuleImpl;

impl LintRule for SelectWithoutWhereRuleImpl {
    fn name(&self) -> &'static str {
        "select_without_where"
    }

    fn description(&self) -> &'static str {
        "Warns when the text contains SELECT but no WHERE"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, source: &str) -> Vec<LintDiagnostic> {
        let Some(select) = SELECT.find(source) else {
            return Vec::new();
        };
        if WHERE.is_match(source) {
            return Vec::new();
        }

        vec![LintDiagnostic::warning(
            OffsetRange::new(select.start(), select.end()),
            "SELECT query has no WHERE clause",
            self.name(),
        )]
    }
}
