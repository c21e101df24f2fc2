pub use sparql_types::{CodeFix, DiagnosticSeverity as LintSeverity, OffsetRange, TextEdit};

/// Lint-specific diagnostic with byte offsets (not line/column).
///
/// Use [`sparql_types::LineIndex`] to turn `range` into editor coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// Byte offset range into the linted text, `start <= end <= text.len()`
    pub range: OffsetRange,
    /// Severity (from rule default or config override)
    pub severity: LintSeverity,
    /// Human-readable message, never empty
    pub message: String,
    /// Rule identifier (e.g., `"unclosed_iri"`)
    pub rule: String,
    /// Optional auto-fix for this diagnostic
    pub fix: Option<CodeFix>,
}

impl LintDiagnostic {
    /// Create a new lint diagnostic
    #[must_use]
    pub fn new(
        range: OffsetRange,
        severity: LintSeverity,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            range,
            severity,
            message: message.into(),
            rule: rule.into(),
            fix: None,
        }
    }

    /// Create a warning diagnostic
    #[must_use]
    pub fn warning(range: OffsetRange, message: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::new(range, LintSeverity::Warning, message, rule)
    }

    /// Create an error diagnostic
    #[must_use]
    pub fn error(range: OffsetRange, message: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::new(range, LintSeverity::Error, message, rule)
    }

    /// Add an auto-fix to this diagnostic
    #[must_use]
    pub fn with_fix(mut self, fix: CodeFix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Replace the severity, keeping everything else
    #[must_use]
    pub fn with_severity(mut self, severity: LintSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns true if this diagnostic has an auto-fix available
    #[must_use]
    pub const fn has_fix(&self) -> bool {
        self.fix.is_some()
    }
}
