use crate::diagnostics::{LintDiagnostic, LintSeverity, OffsetRange};
use crate::traits::LintRule;

/// Lint rule that reports `{` / `}` imbalance
///
/// Every brace in the text counts, including braces inside strings, IRIs
/// and comments. A stray `}` is reported where it stands and scanning goes on
/// from depth zero, so later imbalances are still caught. Braces left open at
/// the end are reported once, at the last one opened.
pub struct UnbalancedBracesRuleImpl;

impl LintRule for UnbalancedBracesRuleImpl {
    fn name(&self) -> &'static str {
        "unbalanced_braces"
    }

    fn description(&self) -> &'static str {
        "Reports closing braces without an opening brace and braces left unclosed"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }

    fn check(&self, source: &str) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        let mut open: Vec<usize> = Vec::new();

        for (offset, c) in source.char_indices() {
            match c {
                '{' => open.push(offset),
                '}' if open.pop().is_none() => {
                    diagnostics.push(LintDiagnostic::error(
                        OffsetRange::new(offset, offset + 1),
                        "Unmatched closing brace",
                        self.name(),
                    ));
                }
                _ => {}
            }
        }

        if let Some(&last) = open.last() {
            let count = open.len();
            let plural = if count == 1 { "" } else { "s" };
            diagnostics.push(LintDiagnostic::error(
                OffsetRange::new(last, last + 1),
                format!("{count} unclosed brace{plural}: missing '}}'"),
                self.name(),
            ));
        }

        diagnostics
    }
}
