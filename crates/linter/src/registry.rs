/// Registry of all available lint rules
use crate::rules::{
    MissingQueryFormRuleImpl, PrefixIriBracketsRuleImpl, PrefixNameColonRuleImpl,
    SelectWithoutWhereRuleImpl, TripleSeparatorRuleImpl, UnbalancedBracesRuleImpl,
    UnclosedIriRuleImpl,
};
use crate::traits::LintRule;
use std::sync::{Arc, LazyLock};

/// Lazily initialized rules, in the order their diagnostics are reported.
/// Rules are created once and reused across all calls.
static RULES: LazyLock<Vec<Arc<dyn LintRule>>> = LazyLock::new(|| {
    vec![
        Arc::new(UnbalancedBracesRuleImpl),
        Arc::new(PrefixNameColonRuleImpl),
        Arc::new(PrefixIriBracketsRuleImpl),
        Arc::new(MissingQueryFormRuleImpl),
        Arc::new(SelectWithoutWhereRuleImpl),
        Arc::new(UnclosedIriRuleImpl),
        Arc::new(TripleSeparatorRuleImpl),
    ]
});

#[must_use]
pub fn all_rules() -> &'static [Arc<dyn LintRule>] {
    &RULES
}

/// Look up a rule by its identifier
#[must_use]
pub fn find_rule(name: &str) -> Option<&'static Arc<dyn LintRule>> {
    all_rules().iter().find(|rule| rule.name() == name)
}

#[must_use]
pub fn all_rule_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = all_rules().iter().map(|rule| rule.name()).collect();
    names.sort_unstable();
    names
}
