use crate::diagnostics::{LintDiagnostic, LintSeverity, OffsetRange};
use crate::rules::QUERY_FORM_KEYWORDS;
use crate::traits::LintRule;
use regex::Regex;
use std::sync::LazyLock;

/// A well-formed `PREFIX name: <iri>` declaration
static PREFIX_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bPREFIX\s+[^\s<>]*:\s*<[^>\n]*>").expect("valid prefix declaration regex")
});

/// `#` to end of line
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[^\n]*").expect("valid line comment regex"));

static QUERY_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", QUERY_FORM_KEYWORDS.join("|")))
        .expect("valid query form regex")
});

/// Lint rule that warns when a non-empty query has no query form keyword
///
/// Prefix declarations are removed before comments so that a `#` inside a
/// namespace IRI such as `<http://www.w3.org/1999/02/22-rdf-syntax-ns#>` does
/// not break the declaration apart.
pub struct MissingQueryFormRuleImpl;

impl LintRule for MissingQueryFormRuleImpl {
    fn name(&self) -> &'static str {
        "missing_query_form"
    }

    fn description(&self) -> &'static str {
        "Warns when the text has content but no SELECT, CONSTRUCT, ASK, DESCRIBE, INSERT or DELETE"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, source: &str) -> Vec<LintDiagnostic> {
        let without_prefixes = PREFIX_DECLARATION.replace_all(source, " ");
        let remaining = LINE_COMMENT.replace_all(&without_prefixes, "");

        if remaining.trim().is_empty() || QUERY_FORM.is_match(&remaining) {
            return Vec::new();
        }

        let first_line_end = source.lines().next().map_or(0, |line| line.trim_end().len());
        vec![LintDiagnostic::warning(
            OffsetRange::new(0, first_line_end),
            format!(
                "Query has no query form: expected one of {}",
                QUERY_FORM_KEYWORDS.join(", ")
            ),
            self.name(),
        )]
    }
}
