//! Severity types for diagnostics and lint rules.

/// Diagnostic severity level for display.
///
/// The linter only ever reports errors and warnings; there is no
/// informational tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticSeverity {
    /// Error - the query is very likely malformed
    Error,
    /// Warning - the query looks suspicious
    Warning,
}

impl DiagnosticSeverity {
    /// Returns true if this severity indicates an error.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Lowercase label used in human and machine output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule severity for lint configuration.
///
/// This represents how a lint rule should be reported, as configured
/// by the user. Rules can be turned off, reported as warnings, or as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleSeverity {
    /// Rule is disabled
    Off,
    /// Rule violations are reported as warnings (default)
    #[default]
    Warn,
    /// Rule violations are reported as errors
    Error,
}

impl RuleSeverity {
    /// Returns true if the rule is enabled (warn or error).
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Convert to diagnostic severity for display.
    ///
    /// Returns `None` if the rule is off.
    #[must_use]
    pub const fn to_diagnostic_severity(self) -> Option<DiagnosticSeverity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(DiagnosticSeverity::Warning),
            Self::Error => Some(DiagnosticSeverity::Error),
        }
    }
}

impl std::fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for RuleSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unknown severity: '{other}' (expected 'off', 'warn' or 'error')"
            )),
        }
    }
}
