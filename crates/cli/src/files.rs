//! Resolving command-line paths and config globs into query inputs.

use anyhow::{Context, Result};
use sparql_config::SparqlConfig;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions treated as SPARQL when walking a directory
pub const QUERY_EXTENSIONS: &[&str] = &["rq", "sparql", "ru"];

/// A query text to lint
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum QueryInput {
    /// Standard input, named with `-`
    Stdin,
    File(PathBuf),
}

impl QueryInput {
    /// Name used in diagnostics output
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .context("Failed to read standard input")?;
                Ok(source)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }
}

/// An input together with its text
pub struct SourceFile {
    pub input: QueryInput,
    pub text: String,
}

/// Read every input once, in order
pub fn read_inputs(inputs: &[QueryInput]) -> Result<Vec<SourceFile>> {
    inputs
        .iter()
        .map(|input| {
            Ok(SourceFile {
                input: input.clone(),
                text: input.read()?,
            })
        })
        .collect()
}

/// Check if a path has one of the [`QUERY_EXTENSIONS`]
pub fn is_query_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| QUERY_EXTENSIONS.contains(&ext))
}

/// Resolve the inputs of a lint run.
///
/// With no `paths`, the config's include globs are expanded under `base_dir`.
/// Otherwise each path is a file (linted whatever its extension), a directory
/// (walked for query files), or `-` for standard input. Excludes apply to
/// everything found by globbing or walking, never to files named explicitly.
pub fn collect_inputs(
    paths: &[PathBuf],
    config: &SparqlConfig,
    base_dir: &Path,
) -> Result<Vec<QueryInput>> {
    if paths.is_empty() {
        return discover_files(config, base_dir);
    }

    let mut inputs = Vec::new();
    let mut seen = BTreeSet::new();
    for path in paths {
        if path.as_os_str() == "-" {
            if !inputs.contains(&QueryInput::Stdin) {
                inputs.push(QueryInput::Stdin);
            }
        } else if path.is_dir() {
            for file in walk_dir(path, config, base_dir) {
                if seen.insert(file.clone()) {
                    inputs.push(QueryInput::File(file));
                }
            }
        } else if path.is_file() {
            if seen.insert(path.clone()) {
                inputs.push(QueryInput::File(path.clone()));
            }
        } else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("No such file or directory: {}", path.display()),
            )
            .into());
        }
    }

    tracing::debug!(count = inputs.len(), "Collected inputs from paths");
    Ok(inputs)
}

/// Expand the config's include globs, in sorted order
fn discover_files(config: &SparqlConfig, base_dir: &Path) -> Result<Vec<QueryInput>> {
    let escaped_base = glob::Pattern::escape(&base_dir.display().to_string());
    let mut files = BTreeSet::new();

    for pattern in config.include_patterns() {
        for expanded in SparqlConfig::expand_braces(pattern) {
            let full_pattern = format!("{escaped_base}/{expanded}");
            tracing::trace!(pattern = %full_pattern, "Expanding include pattern");

            for entry in glob::glob(&full_pattern)
                .with_context(|| format!("Invalid glob pattern: {full_pattern}"))?
            {
                let path = entry.context("Failed to read directory while globbing")?;
                if path.is_file() && config.matches(&path, base_dir) {
                    files.insert(path);
                }
            }
        }
    }

    tracing::debug!(count = files.len(), "Discovered query files");
    Ok(files.into_iter().map(QueryInput::File).collect())
}

/// Query files under `dir`, skipping hidden directories and excluded paths
fn walk_dir(dir: &Path, config: &SparqlConfig, base_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_query_file(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .filter(|path| !is_excluded(path, config, base_dir))
        .collect()
}

fn is_excluded(path: &Path, config: &SparqlConfig, base_dir: &Path) -> bool {
    // Relative walk roots yield relative paths; match them against a relative base
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };
    config.is_excluded(&absolute, base_dir)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, rel: &str, contents: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    fn file_names(inputs: &[QueryInput], root: &Path) -> Vec<String> {
        inputs
            .iter()
            .map(|input| match input {
                QueryInput::Stdin => "-".to_string(),
                QueryInput::File(path) => path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/"),
            })
            .collect()
    }

    #[test]
    fn test_is_query_file() {
        assert!(is_query_file(Path::new("a.rq")));
        assert!(is_query_file(Path::new("dir/b.sparql")));
        assert!(is_query_file(Path::new("c.ru")));
        assert!(!is_query_file(Path::new("d.txt")));
        assert!(!is_query_file(Path::new("rq")));
    }

    #[test]
    fn test_discover_with_default_include() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "b.rq", "ASK {}");
        write(root, "nested/a.sparql", "ASK {}");
        write(root, "update.ru", "DELETE WHERE {}");
        write(root, "notes.md", "");

        let inputs = collect_inputs(&[], &SparqlConfig::default(), root).unwrap();
        assert_eq!(file_names(&inputs, root), vec!["b.rq", "nested/a.sparql"]);
    }

    #[test]
    fn test_discover_with_include_and_exclude() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "queries/a.rq", "");
        write(root, "queries/vendor/b.rq", "");
        write(root, "other/c.rq", "");

        let config = SparqlConfig {
            include: Some(vec!["queries/**/*.rq".to_string()]),
            exclude: Some(vec!["queries/vendor/**".to_string()]),
            lint: None,
        };
        let inputs = collect_inputs(&[], &config, root).unwrap();
        assert_eq!(file_names(&inputs, root), vec!["queries/a.rq"]);
    }

    #[test]
    fn test_directory_walk_skips_hidden_and_excluded() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(root, "q/a.rq", "");
        write(root, "q/b.txt", "");
        write(root, "q/.cache/c.rq", "");
        write(root, "q/vendor/d.ru", "");
        write(root, "q/z/e.sparql", "");

        let config = SparqlConfig {
            include: None,
            exclude: Some(vec!["q/vendor/**".to_string()]),
            lint: None,
        };
        let inputs = collect_inputs(&[root.join("q")], &config, root).unwrap();
        assert_eq!(file_names(&inputs, root), vec!["q/a.rq", "q/z/e.sparql"]);
    }

    #[test]
    fn test_explicit_file_any_extension_and_stdin() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let query = write(root, "query.txt", "ASK {}");

        let paths = vec![query.clone(), PathBuf::from("-"), query, PathBuf::from("-")];
        let inputs = collect_inputs(&paths, &SparqlConfig::default(), root).unwrap();
        assert_eq!(file_names(&inputs, root), vec!["query.txt", "-"]);
    }

    #[test]
    fn test_missing_path_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.rq");
        let error = collect_inputs(&[missing], &SparqlConfig::default(), temp_dir.path())
            .unwrap_err();
        let io_error = error.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io_error.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_inputs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let query = write(temp_dir.path(), "a.rq", "ASK {}");
        let sources = read_inputs(&[QueryInput::File(query)]).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].text, "ASK {}");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(QueryInput::Stdin.display_name(), "<stdin>");
        assert_eq!(
            QueryInput::File(PathBuf::from("a/b.rq")).display_name(),
            "a/b.rq"
        );
    }
}
