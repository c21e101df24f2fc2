use serde::{Deserialize, Serialize};
use std::path::Path;

/// Patterns used when a config file names no `include`
pub const DEFAULT_INCLUDE: &[&str] = &["**/*.rq", "**/*.sparql"];

/// Project configuration read from `.sparqlrc.*` or `sparql.config.*`
///
/// ```yaml
/// include: ["queries/**/*.rq"]
/// exclude: ["queries/vendor/**"]
/// lint:
///   extends: recommended
///   rules:
///     triple_separator: off
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SparqlConfig {
    /// Query file patterns, relative to the config file's directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Patterns removed from the `include` set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Lint configuration, kept raw so the linter owns its own schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lint: Option<serde_json::Value>,
}

impl SparqlConfig {
    /// Include patterns, falling back to [`DEFAULT_INCLUDE`]
    #[must_use]
    pub fn include_patterns(&self) -> Vec<&str> {
        self.include.as_ref().map_or_else(
            || DEFAULT_INCLUDE.to_vec(),
            |patterns| patterns.iter().map(String::as_str).collect(),
        )
    }

    #[must_use]
    pub fn exclude_patterns(&self) -> Vec<&str> {
        self.exclude
            .as_ref()
            .map(|patterns| patterns.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Get the raw lint configuration
    #[must_use]
    pub const fn lint_config(&self) -> Option<&serde_json::Value> {
        self.lint.as_ref()
    }

    /// Check whether `path` is a query file of this project.
    ///
    /// `path` is matched relative to `root`, the directory holding the config
    /// file. Excludes win over includes; paths outside `root` never match.
    #[must_use]
    pub fn matches(&self, path: &Path, root: &Path) -> bool {
        let Ok(rel_path) = path.strip_prefix(root) else {
            tracing::debug!(path = %path.display(), "Path not under config root");
            return false;
        };
        let rel_path = rel_path.to_string_lossy();

        if Self::any_pattern_matches(&self.exclude_patterns(), &rel_path) {
            tracing::trace!(path = %rel_path, "Excluded by pattern");
            return false;
        }

        Self::any_pattern_matches(&self.include_patterns(), &rel_path)
    }

    /// Check whether an `exclude` pattern covers `path`, relative to `root`
    #[must_use]
    pub fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        path.strip_prefix(root).is_ok_and(|rel_path| {
            Self::any_pattern_matches(&self.exclude_patterns(), &rel_path.to_string_lossy())
        })
    }

    fn any_pattern_matches(patterns: &[&str], rel_path: &str) -> bool {
        patterns.iter().any(|pattern| {
            Self::expand_braces(pattern).iter().any(|expanded| {
                glob::Pattern::new(expanded).is_ok_and(|glob_pattern| glob_pattern.matches(rel_path))
            })
        })
    }

    /// Expand brace patterns like `"queries/**/*.{rq,sparql}"` into separate patterns
    #[must_use]
    pub fn expand_braces(pattern: &str) -> Vec<String> {
        // Single brace group only
        if let Some(start) = pattern.find('{') {
            if let Some(end) = pattern[start..].find('}').map(|end| start + end) {
                let before = &pattern[..start];
                let after = &pattern[end + 1..];
                let options = &pattern[start + 1..end];

                return options
                    .split(',')
                    .map(|opt| format!("{before}{}{after}", opt.trim()))
                    .collect();
            }
        }

        vec![pattern.to_string()]
    }
}
