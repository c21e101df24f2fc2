use crate::diagnostics::{CodeFix, LintDiagnostic, LintSeverity, OffsetRange};
use crate::traits::LintRule;
use regex::Regex;
use std::sync::LazyLock;

/// `PREFIX name: value`, capturing the value token on the same line.
/// A bracketed value ends at its `>` even when the query continues without a space.
static PREFIX_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bPREFIX\s+[^\s<>]*:[ \t]*(<[^>\n]*>|\S+)")
        .expect("valid prefix value regex")
});

/// Lint rule that requires the namespace of a `PREFIX` declaration to be an `<IRI>`
pub struct PrefixIriBracketsRuleImpl;

impl LintRule for PrefixIriBracketsRuleImpl {
    fn name(&self) -> &'static str {
        "prefix_iri_brackets"
    }

    fn description(&self) -> &'static str {
        "Requires the namespace IRI of a PREFIX declaration to be enclosed in <...>"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }

    fn check(&self, source: &str) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for caps in PREFIX_VALUE.captures_iter(source) {
            let Some(value) = caps.get(1) else {
                continue;
            };
            let iri = value.as_str();
            if iri.starts_with('<') && iri.ends_with('>') {
                continue;
            }

            let mut diagnostic = LintDiagnostic::error(
                OffsetRange::new(value.start(), value.end()),
                format!("Namespace IRI '{iri}' should be enclosed in angle brackets"),
                self.name(),
            );
            // Half-bracketed values are left alone; wrapping them would double a bracket.
            if !iri.contains(['<', '>']) {
                diagnostic = diagnostic.with_fix(CodeFix::replace(
                    "Wrap IRI in angle brackets",
                    value.start(),
                    value.end(),
                    format!("<{iri}>"),
                ));
            }
            diagnostics.push(diagnostic);
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(source: &str) -> Vec<LintDiagnostic> {
        PrefixIriBracketsRuleImpl.check(source)
    }

    #[test]
    fn test_bare_iri() {
        let diagnostics = check("PREFIX ont: http://x/");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range, OffsetRange::new(12, 21));
        assert_eq!(diagnostics[0].severity, LintSeverity::Error);
        assert!(diagnostics[0].message.contains("'http://x/'"));
    }

    #[test]
    fn test_fix_wraps_iri() {
        let diagnostics = check("PREFIX ont: http://x/");
        let fix = diagnostics[0].fix.as_ref().unwrap();
        assert_eq!(fix.edits[0].offset_range, OffsetRange::new(12, 21));
        assert_eq!(fix.edits[0].new_text, "<http://x/>");
    }

    #[test]
    fn test_bracketed_iri_passes() {
        assert!(check("PREFIX ont: <http://x/>").is_empty());
        assert!(check("PREFIX ont:<http://x/>").is_empty());
        assert!(check("PREFIX : <http://x/>").is_empty());
    }

    #[test]
    fn test_bracketed_iri_followed_directly_by_query() {
        assert!(check("PREFIX ex: <http://x/>SELECT ?s WHERE { ?s ?p ?o . }").is_empty());
    }

    #[test]
    fn test_value_on_next_line_is_not_checked() {
        assert!(check("PREFIX ex:\nSELECT ?s WHERE { ?s ?p ?o . }").is_empty());
    }

    #[test]
    fn test_half_bracketed_iri_has_no_fix() {
        let diagnostics = check("PREFIX ont: <http://x/");
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics[0].has_fix());
    }

    #[test]
    fn test_declaration_without_colon_is_not_checked() {
        assert!(check("PREFIX ont http://x/").is_empty());
    }

    #[test]
    fn test_each_declaration_is_checked() {
        let source = "PREFIX a: http://a/\nPREFIX b: <http://b/>\nprefix c: http://c/";
        let flagged: Vec<&str> = check(source)
            .iter()
            .filter_map(|d| d.range.slice(source))
            .collect();
        assert_eq!(flagged, vec!["http://a/", "http://c/"]);
    }
}
