use crate::diagnostics::{CodeFix, LintDiagnostic, LintSeverity, OffsetRange};
use crate::traits::LintRule;
use regex::Regex;
use std::sync::LazyLock;

/// `PREFIX` keyword followed by whitespace and a bareword
static PREFIX_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bPREFIX\s+([^\s<>]+)").expect("valid prefix name regex")
});

/// Lint rule that requires prefix names in `PREFIX` declarations to end with `:`
///
/// `PREFIX ont <http://example.org/>` is missing the colon after `ont`.
pub struct PrefixNameColonRuleImpl;

impl LintRule for PrefixNameColonRuleImpl {
    fn name(&self) -> &'static str {
        "prefix_name_colon"
    }

    fn description(&self) -> &'static str {
        "Requires the prefix name of a PREFIX declaration to end with ':'"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, source: &str) -> Vec<LintDiagnostic> {
        PREFIX_NAME
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .filter(|name| !name.as_str().ends_with(':'))
            .map(|name| {
                LintDiagnostic::warning(
                    OffsetRange::new(name.start(), name.end()),
                    format!("Prefix name '{}' should end with ':'", name.as_str()),
                    self.name(),
                )
                .with_fix(CodeFix::insert(
                    format!("Add ':' after '{}'", name.as_str()),
                    name.end(),
                    ":",
                ))
            })
            .collect()
    }
}
