use crate::diagnostics::LintSeverity;
use crate::registry::{all_rule_names, find_rule};
use serde::Deserialize;
use sparql_types::RuleSeverity;
use std::collections::HashMap;
use std::fmt::Write;

/// Name of the preset that enables every rule at its default severity
pub const RECOMMENDED_PRESET: &str = "recommended";

const VALID_PRESETS: &[&str] = &[RECOMMENDED_PRESET];

/// Configuration for a single lint rule
///
/// Supports multiple formats:
/// ```yaml
/// # Simple severity
/// rule_name: warn
///
/// # Object style
/// rule_name:
///   severity: warn
///
/// # ESLint-style array
/// rule_name: [warn]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintRuleConfig(pub RuleSeverity);

impl LintRuleConfig {
    /// Get the severity for this rule configuration
    #[must_use]
    pub const fn severity(self) -> RuleSeverity {
        self.0
    }
}

/// Custom deserializer for `LintRuleConfig` to handle the string, array and object forms
impl<'de> Deserialize<'de> for LintRuleConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};

        struct LintRuleConfigVisitor;

        impl<'de> Visitor<'de> for LintRuleConfigVisitor {
            type Value = LintRuleConfig;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str(
                    "a severity string ('off', 'warn', 'error'), \
                     an array [severity], \
                     or an object { severity }",
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map(LintRuleConfig).map_err(E::custom)
            }

            // YAML 1.1 readers turn a bare `off` into `false`
            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value {
                    Err(E::invalid_value(de::Unexpected::Bool(true), &self))
                } else {
                    Ok(LintRuleConfig(RuleSeverity::Off))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let config: LintRuleConfig = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &"array with severity"))?;

                // Rule options were never supported; tolerate them in ESLint-style arrays
                while seq.next_element::<IgnoredAny>()?.is_some() {}

                Ok(config)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut severity = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "severity" {
                        let config: LintRuleConfig = map.next_value()?;
                        severity = Some(config.0);
                    } else {
                        return Err(de::Error::unknown_field(&key, &["severity"]));
                    }
                }
                severity
                    .map(LintRuleConfig)
                    .ok_or_else(|| de::Error::missing_field("severity"))
            }
        }

        deserializer.deserialize_any(LintRuleConfigVisitor)
    }
}

/// Extends configuration - can be a single preset or multiple
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum ExtendsConfig {
    /// Single preset: `extends: recommended` or `lint: recommended`
    Single(String),
    /// Multiple presets: `extends: [recommended]`
    Multiple(Vec<String>),
}

impl ExtendsConfig {
    /// Get all presets as a vector (normalizes single to vec)
    #[must_use]
    pub fn presets(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => vec![s.as_str()],
            Self::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

/// Full lint configuration struct with extends and rules
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FullLintConfig {
    /// Presets to extend (optional)
    #[serde(default)]
    pub extends: Option<ExtendsConfig>,

    /// Rule configurations (optional)
    #[serde(default)]
    pub rules: HashMap<String, LintRuleConfig>,
}

/// Overall lint configuration
///
/// ```yaml
/// # Every rule at its default severity
/// lint: recommended
///
/// # Fine-grained rules only (no presets): only the listed rules run
/// lint:
///   rules:
///     unbalanced_braces: error
///     unclosed_iri: warn
///
/// # Preset with overrides
/// lint:
///   extends: recommended
///   rules:
///     triple_separator: off
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum LintConfig {
    /// Preset(s): `lint: recommended` or `lint: [recommended]`
    Preset(ExtendsConfig),

    /// Full configuration with optional extends and rules
    Full(FullLintConfig),
}

/// The default is the recommended preset: with no configuration every check runs.
impl Default for LintConfig {
    fn default() -> Self {
        Self::recommended()
    }
}

impl LintConfig {
    /// Get recommended configuration
    #[must_use]
    pub fn recommended() -> Self {
        Self::Preset(ExtendsConfig::Single(RECOMMENDED_PRESET.to_string()))
    }

    /// Validate the lint configuration against available rules
    ///
    /// Returns an error if any preset or configured rule name is invalid.
    /// The error message includes a list of valid names.
    pub fn validate(&self) -> Result<(), String> {
        let (extends, rules) = match self {
            Self::Preset(presets) => (Some(presets), None),
            Self::Full(FullLintConfig { extends, rules }) => (extends.as_ref(), Some(rules)),
        };

        if let Some(presets) = extends {
            for preset in presets.presets() {
                if !VALID_PRESETS.contains(&preset) {
                    return Err(format!(
                        "Invalid preset name: '{preset}'\n\nValid presets are:\n  - {}",
                        VALID_PRESETS.join("\n  - ")
                    ));
                }
            }
        }

        let valid_rules = all_rule_names();
        let mut invalid_rules: Vec<&str> = rules
            .into_iter()
            .flat_map(HashMap::keys)
            .map(String::as_str)
            .filter(|rule| !valid_rules.contains(rule))
            .collect();

        if invalid_rules.is_empty() {
            return Ok(());
        }

        invalid_rules.sort_unstable();

        let mut error = format!("Invalid lint rule name(s): {}\n", invalid_rules.join(", "));
        for rule in &invalid_rules {
            if let Some(suggestion) = suggest_rule_name(rule) {
                let _ = writeln!(error, "  '{rule}': did you mean '{suggestion}'?");
            }
        }
        error.push_str("\nValid rule names are:\n");
        for rule in &valid_rules {
            let _ = writeln!(error, "  - {rule}");
        }
        Err(error)
    }

    /// Get the severity for a rule, considering presets and overrides
    #[must_use]
    pub fn get_severity(&self, rule_name: &str) -> Option<RuleSeverity> {
        match self {
            Self::Preset(presets) => Self::severity_from_presets(presets, rule_name),
            Self::Full(FullLintConfig { extends, rules }) => {
                let preset_severity = extends
                    .as_ref()
                    .and_then(|ext| Self::severity_from_presets(ext, rule_name));

                rules
                    .get(rule_name)
                    .map(|config| config.severity())
                    .or(preset_severity)
            }
        }
    }

    /// Check if a rule is enabled (not Off and not None)
    #[must_use]
    pub fn is_enabled(&self, rule_name: &str) -> bool {
        self.get_severity(rule_name)
            .is_some_and(RuleSeverity::is_enabled)
    }

    /// The severity diagnostics of `rule_name` should be reported with, `None` if it is off
    #[must_use]
    pub fn diagnostic_severity(&self, rule_name: &str) -> Option<LintSeverity> {
        self.get_severity(rule_name)
            .and_then(RuleSeverity::to_diagnostic_severity)
    }

    /// Return a copy with one rule's severity set, on top of everything else
    #[must_use]
    pub fn with_rule(&self, rule_name: impl Into<String>, severity: RuleSeverity) -> Self {
        let mut rules = HashMap::new();
        rules.insert(rule_name.into(), LintRuleConfig(severity));
        self.merge(&Self::Full(FullLintConfig {
            extends: None,
            rules,
        }))
    }

    /// Get severity from a list of presets (later presets override earlier)
    fn severity_from_presets(presets: &ExtendsConfig, rule_name: &str) -> Option<RuleSeverity> {
        let mut severity = None;
        for preset in presets.presets() {
            if preset == RECOMMENDED_PRESET {
                if let Some(s) = Self::recommended_severity(rule_name) {
                    severity = Some(s);
                }
            }
        }
        severity
    }

    /// Every registered rule, at its own default severity
    fn recommended_severity(rule_name: &str) -> Option<RuleSeverity> {
        find_rule(rule_name).map(|rule| match rule.default_severity() {
            LintSeverity::Error => RuleSeverity::Error,
            LintSeverity::Warning => RuleSeverity::Warn,
        })
    }

    /// Merge another config into this one (e.g. command-line overrides)
    #[must_use]
    pub fn merge(&self, override_config: &Self) -> Self {
        match (self, override_config) {
            // If override is a preset, use it directly
            (_, Self::Preset(name)) => Self::Preset(name.clone()),

            // If override is empty Full config, keep base
            (
                base,
                Self::Full(FullLintConfig {
                    extends: None,
                    rules,
                }),
            ) if rules.is_empty() => base.clone(),

            (
                Self::Full(FullLintConfig {
                    extends: base_ext,
                    rules: base_rules,
                }),
                Self::Full(FullLintConfig {
                    extends: override_ext,
                    rules: override_rules,
                }),
            ) => {
                let mut merged_rules = base_rules.clone();
                merged_rules.extend(override_rules.iter().map(|(k, v)| (k.clone(), *v)));
                Self::Full(FullLintConfig {
                    extends: override_ext.clone().or_else(|| base_ext.clone()),
                    rules: merged_rules,
                })
            }

            // Preset + Full override: convert preset to extends and merge
            (
                Self::Preset(presets),
                Self::Full(FullLintConfig {
                    extends: override_ext,
                    rules: override_rules,
                }),
            ) => Self::Full(FullLintConfig {
                extends: override_ext.clone().or_else(|| Some(presets.clone())),
                rules: override_rules.clone(),
            }),
        }
    }
}

/// Closest registered rule name, if any is similar enough to be a likely typo
fn suggest_rule_name(unknown: &str) -> Option<&'static str> {
    all_rule_names()
        .into_iter()
        .map(|name| (name, strsim::jaro_winkler(unknown, name)))
        .filter(|&(_, score)| score >= 0.85)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}
