//! Snapshot formatting for lint diagnostics
//!
//! Diagnostics are rendered one per line with the text they cover, so
//! snapshots stay readable without counting offsets by hand.

use sparql_linter::LintDiagnostic;

/// Format diagnostics for snapshot testing.
///
/// Each line reads `[n] severity rule start..end "covered text": message`.
///
/// ```ignore
/// let diagnostics = sparql_linter::lint("{ a } }");
/// insta::assert_snapshot!(format_diagnostics("{ a } }", &diagnostics));
/// ```
pub fn format_diagnostics(source: &str, diagnostics: &[LintDiagnostic]) -> String {
    if diagnostics.is_empty() {
        return String::from("(no diagnostics)");
    }

    diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let covered = d.range.slice(source).unwrap_or("<out of bounds>");
            format!(
                "[{}] {} {} {} {covered:?}: {}",
                i + 1,
                d.severity,
                d.rule,
                d.range,
                d.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The rule name of each diagnostic, in report order
pub fn rules_of(diagnostics: &[LintDiagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.rule.as_str()).collect()
}
