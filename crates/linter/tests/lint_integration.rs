use sparql_linter::{apply_fixes, lint, lint_with_config, LintConfig, LintSeverity, RuleSeverity};
use sparql_test_utils::fixtures::{BROKEN_QUERY, PREFIX_ONLY, SELECT_QUERY};
use sparql_test_utils::{format_diagnostics, rules_of};

fn snapshot(source: &str) -> String {
    format_diagnostics(source, &lint(source))
}

fn of_rule<'a>(
    diagnostics: &'a [sparql_linter::LintDiagnostic],
    rule: &str,
) -> Vec<&'a sparql_linter::LintDiagnostic> {
    diagnostics.iter().filter(|d| d.rule == rule).collect()
}

#[test]
fn test_nested_braces_are_balanced() {
    let diagnostics = lint("SELECT * WHERE { { ?s ?p ?o . } UNION { ?s ?q ?o . } }");
    assert!(of_rule(&diagnostics, "unbalanced_braces").is_empty());
}

#[test]
fn test_stray_closing_brace() {
    insta::assert_snapshot!(snapshot("{ a } }"), @r#"
    [1] error unbalanced_braces 6..7 "}": Unmatched closing brace
    [2] warning missing_query_form 0..7 "{ a } }": Query has no query form: expected one of SELECT, CONSTRUCT, ASK, DESCRIBE, INSERT, DELETE
    [3] warning triple_separator 2..3 "a": Triple pattern should end with a separator
    "#);
}

#[test]
fn test_unclosed_brace() {
    insta::assert_snapshot!(snapshot("{ { a }"), @r#"
    [1] error unbalanced_braces 0..1 "{": 1 unclosed brace: missing '}'
    [2] warning missing_query_form 0..7 "{ { a }": Query has no query form: expected one of SELECT, CONSTRUCT, ASK, DESCRIBE, INSERT, DELETE
    "#);
}

#[test]
fn test_prefix_name_without_colon() {
    let source = "PREFIX ont <http://x/>";
    let diagnostics = lint(source);
    let prefix = of_rule(&diagnostics, "prefix_name_colon");
    assert_eq!(prefix.len(), 1);
    assert_eq!(prefix[0].severity, LintSeverity::Warning);
    assert!(prefix[0].message.contains("ont"));
    assert!(of_rule(&diagnostics, "prefix_iri_brackets").is_empty());
}

#[test]
fn test_prefix_iri_without_brackets() {
    let source = "PREFIX ont: http://x/";
    let diagnostics = lint(source);
    let errors: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.severity == LintSeverity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule, "prefix_iri_brackets");
    assert!(errors[0].message.contains("http://x/"));
    assert_eq!(errors[0].range.slice(source), Some("http://x/"));
}

#[test]
fn test_comment_only_text() {
    assert!(lint("# just a comment").is_empty());
    assert!(lint("PREFIX ex: <http://x/ns#>\n# nothing else").is_empty());
}

#[test]
fn test_prefix_only_text_has_no_query_form() {
    assert_eq!(rules_of(&lint(PREFIX_ONLY)), vec!["missing_query_form"]);
}

#[test]
fn test_select_without_where() {
    insta::assert_snapshot!(snapshot("SELECT ?x"), @r#"[1] warning select_without_where 0..6 "SELECT": SELECT query has no WHERE clause"#);
    insta::assert_snapshot!(snapshot("SELECT ?x WHERE { ?x a ?y . }"), @"(no diagnostics)");
}

#[test]
fn test_unterminated_iri() {
    let source = "<http://unterminated";
    let diagnostics = lint(source);
    let unclosed = of_rule(&diagnostics, "unclosed_iri");
    assert_eq!(unclosed.len(), 1);
    assert_eq!(unclosed[0].range.start, 0);
    assert_eq!(unclosed[0].range.end, source.len());
    assert_eq!(unclosed[0].severity, LintSeverity::Error);
}

#[test]
fn test_filter_line_needs_no_separator() {
    assert!(of_rule(&lint("{ FILTER(?x > 1) }"), "triple_separator").is_empty());
}

#[test]
fn test_realistic_query_is_clean() {
    insta::assert_snapshot!(snapshot(SELECT_QUERY), @"(no diagnostics)");
}

#[test]
fn test_broken_query() {
    insta::assert_snapshot!(snapshot(BROKEN_QUERY), @r#"
    [1] error unbalanced_braces 162..163 "}": Unmatched closing brace
    [2] warning prefix_name_colon 7..9 "ex": Prefix name 'ex' should end with ':'
    [3] error prefix_iri_brackets 45..71 "http://xmlns.com/foaf/0.1/": Namespace IRI 'http://xmlns.com/foaf/0.1/' should be enclosed in angle brackets
    [4] warning select_without_where 72..78 "SELECT": SELECT query has no WHERE clause
    [5] error unclosed_iri 135..159 "<http://example.org/home": Unclosed IRI
    [6] warning triple_separator 89..112 "?person foaf:name ?name": Triple pattern should end with a separator
    [7] warning triple_separator 115..159 "?person ex:homepage <http://example.org/home": Triple pattern should end with a separator
    "#);
}

#[test]
fn test_lint_is_deterministic() {
    for source in [BROKEN_QUERY, SELECT_QUERY, "{ a } }", ""] {
        assert_eq!(lint(source), lint(source));
    }
}

#[test]
fn test_ranges_stay_on_char_boundaries() {
    let inputs = [
        "",
        "<",
        "{",
        "}",
        "PREFIX",
        "PREFIX :",
        "PREFIX a: ",
        "\u{feff}SELECT ?x",
        "é<é",
        "PREFIX été <http://x/é",
        "PREFIX ñ: http://ñ/",
        "{ ünïcödé } }",
        "SELECT ?名前 WHERE {\r\n  ?s ?p \"日本語\"\r\n}",
        "ASK { ?s ?p <http://例え.jp/ }",
        "é{{{",
    ];

    for source in inputs {
        for diagnostic in lint(source) {
            let range = diagnostic.range;
            assert!(range.start <= range.end, "{source:?}: {range}");
            assert!(range.end <= source.len(), "{source:?}: {range}");
            assert!(source.is_char_boundary(range.start), "{source:?}: {range}");
            assert!(source.is_char_boundary(range.end), "{source:?}: {range}");
            assert!(!diagnostic.message.is_empty());
        }
    }
}

#[test]
fn test_config_turns_rule_off() {
    let config = LintConfig::recommended().with_rule("triple_separator", RuleSeverity::Off);
    let diagnostics = lint_with_config(BROKEN_QUERY, &config);
    assert!(of_rule(&diagnostics, "triple_separator").is_empty());
    assert_eq!(diagnostics.len(), lint(BROKEN_QUERY).len() - 2);
}

#[test]
fn test_config_override_changes_only_severity() {
    let config = LintConfig::recommended().with_rule("unbalanced_braces", RuleSeverity::Warn);
    let defaults = lint(BROKEN_QUERY);
    let overridden = lint_with_config(BROKEN_QUERY, &config);
    assert_eq!(defaults.len(), overridden.len());

    for (before, after) in defaults.iter().zip(&overridden) {
        assert_eq!(before.range, after.range);
        assert_eq!(before.message, after.message);
        if after.rule == "unbalanced_braces" {
            assert_eq!(after.severity, LintSeverity::Warning);
        } else {
            assert_eq!(before.severity, after.severity);
        }
    }
}

#[test]
fn test_rules_only_config_runs_listed_rules() {
    let config: LintConfig =
        serde_json::from_value(serde_json::json!({ "rules": { "unclosed_iri": "error" } }))
            .unwrap();
    assert_eq!(
        rules_of(&lint_with_config(BROKEN_QUERY, &config)),
        vec!["unclosed_iri"]
    );
}

#[test]
fn test_fixes_resolve_prefix_and_separator_diagnostics() {
    let fixed = apply_fixes(BROKEN_QUERY, &lint(BROKEN_QUERY));
    let diagnostics = lint(&fixed);

    for rule in ["prefix_name_colon", "prefix_iri_brackets", "triple_separator"] {
        assert!(of_rule(&diagnostics, rule).is_empty(), "{rule} still fires");
    }
    assert!(fixed.starts_with("PREFIX ex: <http://example.org/>\nPREFIX foaf: <http://xmlns.com/foaf/0.1/>\n"));
    assert!(fixed.contains("  ?person foaf:name ?name .\n"));
}
