use anyhow::{Context, Result};
use sparql_config::{find_config, load_config, ConfigError, SparqlConfig};
use sparql_linter::{LintConfig, RuleSeverity};
use std::path::PathBuf;

/// A `--rule NAME=SEVERITY` override from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOverride {
    pub name: String,
    pub severity: RuleSeverity,
}

/// Parse `NAME=SEVERITY`; used as a clap value parser
pub fn parse_rule_override(value: &str) -> std::result::Result<RuleOverride, String> {
    let (name, severity) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=SEVERITY, got '{value}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing rule name in '{value}'"));
    }
    Ok(RuleOverride {
        name: name.to_string(),
        severity: severity.trim().parse()?,
    })
}

/// Common context for commands that need the project config
pub struct CommandContext {
    pub config: SparqlConfig,
    /// Directory globs are resolved against: the config file's directory, or the working directory
    pub base_dir: PathBuf,
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Load the config named on the command line, or discover one.
    ///
    /// Running without any config file is fine: defaults apply and globs
    /// resolve against the working directory.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get working directory")?;

        let config_path = match config_path {
            Some(path) => Some(path),
            None => find_config(&current_dir).context("Failed to search for config")?,
        };

        let Some(config_path) = config_path else {
            tracing::debug!(dir = %current_dir.display(), "No config file, using defaults");
            return Ok(Self {
                config: SparqlConfig::default(),
                base_dir: current_dir,
                config_path: None,
            });
        };

        let config = load_config(&config_path).context("Failed to load config")?;

        // Get the base directory from the config path
        let base_dir = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current_dir.join(parent),
            _ => current_dir,
        };

        Ok(Self {
            config,
            base_dir,
            config_path: Some(config_path),
        })
    }

    /// Lint configuration from the config file with command-line overrides applied
    pub fn lint_config(&self, overrides: &[RuleOverride]) -> Result<LintConfig> {
        let origin = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("<defaults>"));

        let base = match self.config.lint_config() {
            Some(value) => serde_json::from_value::<LintConfig>(value.clone()).map_err(|e| {
                ConfigError::Invalid {
                    path: origin.clone(),
                    message: format!("invalid 'lint' section: {e}"),
                }
            })?,
            None => LintConfig::default(),
        };
        base.validate()
            .map_err(|message| ConfigError::Invalid { path: origin, message })?;

        let merged = overrides.iter().fold(base, |config, rule| {
            config.with_rule(rule.name.clone(), rule.severity)
        });
        merged.validate().map_err(|message| ConfigError::Invalid {
            path: PathBuf::from("--rule"),
            message,
        })?;

        Ok(merged)
    }
}
