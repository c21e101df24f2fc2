mod config;
mod diagnostics;
mod fixes;
mod linter;
mod registry;
mod rules;
mod traits;

pub use config::{ExtendsConfig, FullLintConfig, LintConfig, LintRuleConfig, RECOMMENDED_PRESET};
pub use diagnostics::{CodeFix, LintDiagnostic, LintSeverity, OffsetRange, TextEdit};
pub use fixes::apply_fixes;
pub use linter::{lint, lint_with_config};
pub use registry::{all_rule_names, all_rules, find_rule};
pub use sparql_types::RuleSeverity;
pub use traits::LintRule;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// the linter. Import with:
///
/// ```rust,ignore
/// use sparql_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::LintConfig;
    pub use crate::diagnostics::{LintDiagnostic, LintSeverity, OffsetRange};
    pub use crate::fixes::apply_fixes;
    pub use crate::linter::{lint, lint_with_config};
    pub use crate::traits::LintRule;
    pub use sparql_types::RuleSeverity;
}
