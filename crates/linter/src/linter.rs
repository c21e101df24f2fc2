use crate::config::LintConfig;
use crate::diagnostics::LintDiagnostic;
use crate::registry::all_rules;

/// Run every rule at its default severity.
///
/// Diagnostics are grouped by rule, in registry order, and each rule reports
/// in the order it scans the text. The result depends only on `source`.
#[must_use]
pub fn lint(source: &str) -> Vec<LintDiagnostic> {
    lint_with_config(source, &LintConfig::recommended())
}

/// Run the rules `config` enables, reporting each with its configured severity.
#[must_use]
pub fn lint_with_config(source: &str, config: &LintConfig) -> Vec<LintDiagnostic> {
    let mut diagnostics = Vec::new();

    for rule in all_rules() {
        let Some(severity) = config.diagnostic_severity(rule.name()) else {
            tracing::trace!(rule = rule.name(), "rule disabled");
            continue;
        };

        let found = rule.check(source);
        tracing::trace!(rule = rule.name(), count = found.len(), "rule checked");
        diagnostics.extend(found.into_iter().map(|d| d.with_severity(severity)));
    }

    tracing::debug!(
        len = source.len(),
        diagnostics = diagnostics.len(),
        "linted query text"
    );
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::LintSeverity;
    use sparql_types::RuleSeverity;

    #[test]
    fn test_clean_query_has_no_diagnostics() {
        let source = "PREFIX ex: <http://example.org/>\nSELECT ?s WHERE {\n  ?s ex:p ?o .\n}";
        assert!(lint(source).is_empty());
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(lint("").is_empty());
        assert!(lint("  \n\t\n").is_empty());
    }

    #[test]
    fn test_diagnostics_follow_registry_order() {
        let diagnostics = lint("PREFIX ont <http://x/>\nSELECT ?x { ?x a <http://y }");
        let rules: Vec<&str> = diagnostics.iter().map(|d| d.rule.as_str()).collect();
        assert_eq!(
            rules,
            vec![
                "prefix_name_colon",
                "select_without_where",
                "unclosed_iri",
                "triple_separator"
            ]
        );
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let config = LintConfig::recommended().with_rule("select_without_where", RuleSeverity::Off);
        let diagnostics = lint_with_config("SELECT ?x", &config);
        assert!(diagnostics.iter().all(|d| d.rule != "select_without_where"));
    }

    #[test]
    fn test_severity_override() {
        let config = LintConfig::recommended().with_rule("unclosed_iri", RuleSeverity::Warn);
        let diagnostics = lint_with_config("ASK { ?s ?p <http://x }", &config);
        let unclosed = diagnostics
            .iter()
            .find(|d| d.rule == "unclosed_iri")
            .unwrap();
        assert_eq!(unclosed.severity, LintSeverity::Warning);
        assert_eq!(unclosed.message, "Unclosed IRI");
    }
}
