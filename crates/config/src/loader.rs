use crate::{ConfigError, Result, SparqlConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
pub const CONFIG_FILES: &[&str] = &[
    ".sparqlrc.yml",
    ".sparqlrc.yaml",
    ".sparqlrc.json",
    ".sparqlrc.toml",
    ".sparqlrc",
    "sparql.config.yml",
    "sparql.config.yaml",
    "sparql.config.json",
    "sparql.config.toml",
];

/// Find a config file by walking up the directory tree from the given start directory.
/// Returns the path to the config file if found.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Ok(Some(config_path));
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            break;
        }
    }

    Ok(None)
}

/// Load a config from the specified path.
/// Automatically detects the format based on file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<SparqlConfig> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(
        include = config.include_patterns().len(),
        exclude = config.exclude_patterns().len(),
        has_lint = config.lint.is_some(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Load a config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<SparqlConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    tracing::debug!(extension, file_name, "Detecting config format");

    let config = match extension {
        "yml" | "yaml" => {
            tracing::trace!("Parsing as YAML");
            parse_yaml(contents, path)?
        }
        "json" => {
            tracing::trace!("Parsing as JSON");
            parse_json(contents, path)?
        }
        "toml" => {
            tracing::trace!("Parsing as TOML");
            parse_toml(contents, path)?
        }
        "" if file_name == ".sparqlrc" => {
            // .sparqlrc without extension - try YAML first, then JSON
            tracing::trace!("Trying YAML then JSON for .sparqlrc");
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::debug!("Validating config");
    validate_config(&config, path)?;

    Ok(config)
}

/// Parse YAML configuration
fn parse_yaml(contents: &str, path: &Path) -> Result<SparqlConfig> {
    // An empty YAML document is an empty config
    if contents.trim().is_empty() {
        return Ok(SparqlConfig::default());
    }
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

/// Parse JSON configuration
fn parse_json(contents: &str, path: &Path) -> Result<SparqlConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Parse TOML configuration
fn parse_toml(contents: &str, path: &Path) -> Result<SparqlConfig> {
    toml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("TOML parse error: {e}"),
    })
}

/// Validate the loaded configuration
#[tracing::instrument(skip(config, path), fields(path = %path.display()))]
fn validate_config(config: &SparqlConfig, path: &Path) -> Result<()> {
    if config.include.as_ref().is_some_and(Vec::is_empty) {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            message: "'include' must list at least one pattern".to_string(),
        });
    }

    for (field, patterns) in [
        ("include", config.include_patterns()),
        ("exclude", config.exclude_patterns()),
    ] {
        for pattern in patterns {
            if pattern.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    path: path.to_path_buf(),
                    message: format!("'{field}' has an empty pattern"),
                });
            }
            for expanded in SparqlConfig::expand_braces(pattern) {
                if let Err(e) = glob::Pattern::new(&expanded) {
                    return Err(ConfigError::Invalid {
                        path: path.to_path_buf(),
                        message: format!("'{field}' pattern '{pattern}' is not a valid glob: {e}"),
                    });
                }
            }
        }
    }

    tracing::debug!("Config validation passed");
    Ok(())
}
