use crate::diagnostics::{LintDiagnostic, LintSeverity, OffsetRange};
use crate::traits::LintRule;
use regex::Regex;
use std::sync::LazyLock;

/// A maximal run from `<` up to (not including) the next `>` or end of line
static IRI_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>\n]*").expect("valid IRI run regex"));

/// Lint rule that reports `<` without a matching `>` on the same line
///
/// Comparison operators such as `?x < 3` are reported as well.
pub struct UnclosedIriRuleImpl;

impl LintRule for UnclosedIriRuleImpl {
    fn name(&self) -> &'static str {
        "unclosed_iri"
    }

    fn description(&self) -> &'static str {
        "Reports IRIs opened with '<' that are not closed with '>' before the end of the line"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }

    fn check(&self, source: &str) -> Vec<LintDiagnostic> {
        IRI_RUN
            .find_iter(source)
            .filter(|run| !source[run.end()..].starts_with('>'))
            .map(|run| {
                let end = run.start() + run.as_str().trim_end().len();
                LintDiagnostic::error(
                    OffsetRange::new(run.start(), end),
                    "Unclosed IRI",
                    self.name(),
                )
            })
            .collect()
    }
}
