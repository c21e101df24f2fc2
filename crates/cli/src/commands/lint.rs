use crate::commands::common::{CommandContext, RuleOverride};
use crate::commands::fix::{apply_fixes, collect_fixable_diagnostics, display_dry_run};
use crate::exit_code::ExitCode;
use crate::files::{collect_inputs, read_inputs, QueryInput, SourceFile};
use crate::watch::{FileWatcher, WatchConfig};
use crate::{OutputFormat, OutputOptions};
use anyhow::Result;
use colored::Colorize;
use sparql_linter::{lint_with_config, LintConfig, LintDiagnostic, LintSeverity};
use sparql_types::LineIndex;
use std::path::PathBuf;

/// Diagnostic output structure, 1-based positions
pub struct DiagnosticOutput {
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub message: String,
    pub severity: LintSeverity,
    pub rule: String,
    pub fixable: bool,
}

impl DiagnosticOutput {
    fn new(source: &str, index: &LineIndex, diagnostic: &LintDiagnostic) -> Self {
        let range = index.range(source, diagnostic.range);
        Self {
            // Convert from 0-based to 1-based for display
            line: range.start.line + 1,
            column: range.start.character + 1,
            end_line: range.end.line + 1,
            end_column: range.end.character + 1,
            message: diagnostic.message.clone(),
            severity: diagnostic.severity,
            rule: diagnostic.rule.clone(),
            fixable: diagnostic.has_fix(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.message,
            "severity": self.severity.as_str(),
            "rule": self.rule,
            "fixable": self.fixable,
            "location": {
                "start": { "line": self.line, "column": self.column },
                "end": { "line": self.end_line, "column": self.end_column }
            }
        })
    }
}

/// Lint results for one input, diagnostics in report order
pub struct FileReport {
    pub file: String,
    pub diagnostics: Vec<DiagnosticOutput>,
}

impl FileReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

/// Totals over a set of reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintSummary {
    pub files_checked: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl LintSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        Self {
            files_checked: reports.len(),
            errors: reports.iter().map(FileReport::error_count).sum(),
            warnings: reports.iter().map(FileReport::warning_count).sum(),
        }
    }

    pub const fn exit_code(self) -> ExitCode {
        if self.errors > 0 {
            ExitCode::LintError
        } else {
            ExitCode::Success
        }
    }
}

/// Lint one query text and convert its diagnostics to output positions
pub fn lint_source(file: String, source: &str, config: &LintConfig) -> FileReport {
    let index = LineIndex::new(source);
    let diagnostics = lint_with_config(source, config)
        .iter()
        .map(|diagnostic| DiagnosticOutput::new(source, &index, diagnostic))
        .collect();
    FileReport { file, diagnostics }
}

/// Lint every source, in input order
pub fn lint_sources(sources: &[SourceFile], config: &LintConfig) -> Vec<FileReport> {
    sources
        .iter()
        .map(|source| lint_source(source.input.display_name(), &source.text, config))
        .collect()
}

#[allow(clippy::fn_params_excessive_bools, clippy::too_many_arguments)]
pub fn run(
    config_path: Option<PathBuf>,
    paths: &[PathBuf],
    rule_overrides: &[RuleOverride],
    format: OutputFormat,
    watch: bool,
    fix: bool,
    fix_dry_run: bool,
    output_opts: OutputOptions,
) -> Result<ExitCode> {
    if watch {
        if fix || fix_dry_run {
            eprintln!(
                "{}",
                "Warning: --fix and --fix-dry-run are ignored in watch mode".yellow()
            );
        }
        if paths.iter().any(|path| path.as_os_str() == "-") {
            eprintln!("{}", "Error: --watch cannot read from standard input".red());
            return Ok(ExitCode::ConfigError);
        }
        return run_watch_mode(config_path, paths, rule_overrides, format);
    }

    // Start timing
    let start_time = std::time::Instant::now();

    let ctx = CommandContext::load(config_path)?;
    let lint_config = ctx.lint_config(rule_overrides)?;
    let inputs = collect_inputs(paths, &ctx.config, &ctx.base_dir)?;
    tracing::info!(inputs = inputs.len(), "Linting");
    let mut sources = read_inputs(&inputs)?;

    // Handle fix modes
    let mut fixes_applied = 0;
    if fix || fix_dry_run {
        if fix && inputs.contains(&QueryInput::Stdin) {
            eprintln!(
                "{}",
                "Warning: --fix does not rewrite standard input".yellow()
            );
        }

        let fixes = collect_fixable_diagnostics(&sources, &lint_config);
        fixes_applied = fixes.iter().map(|f| f.diagnostics.len()).sum();

        if fixes_applied > 0 {
            if fix_dry_run {
                display_dry_run(&fixes, format);
            } else {
                for (path, fixed) in apply_fixes(&fixes, format)? {
                    if let Some(source) = sources
                        .iter_mut()
                        .find(|source| matches!(&source.input, QueryInput::File(p) if *p == path))
                    {
                        source.text = fixed;
                    }
                }
            }
        }
    }

    // After --fix, the report shows what is left
    let reports = lint_sources(&sources, &lint_config);
    let summary = LintSummary::from_reports(&reports);

    print_reports(&reports, format);

    if matches!(format, OutputFormat::Json) {
        print_json_summary(&reports, summary);
    }

    // Summary
    if matches!(format, OutputFormat::Human) && output_opts.show_info {
        println!();

        // Report fixes if any were applied/detected
        if fixes_applied > 0 && fix {
            println!(
                "{}",
                format!("✓ Fixed {fixes_applied} issue(s)").green().bold()
            );
        } else if fixes_applied > 0 && fix_dry_run {
            println!(
                "{}",
                format!("ℹ Would fix {fixes_applied} issue(s)")
                    .cyan()
                    .bold()
            );
        }

        print_summary_line(summary);
        println!(
            "  {} {} file(s) in {:.2}s",
            "⏱".dimmed(),
            summary.files_checked,
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(summary.exit_code())
}

/// Print every diagnostic in the given format (JSON prints nothing here)
pub fn print_reports(reports: &[FileReport], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            for report in reports {
                for diag in &report.diagnostics {
                    let (label, message) = if diag.severity.is_error() {
                        ("error:".red().bold(), diag.message.red())
                    } else {
                        ("warning:".yellow().bold(), diag.message.yellow())
                    };
                    println!(
                        "\n{}:{}:{}: {} {}",
                        report.file, diag.line, diag.column, label, message
                    );
                    println!("  {}: {}", "rule".dimmed(), diag.rule.dimmed());
                }
            }
        }
        OutputFormat::Json => {}
        OutputFormat::Github => {
            // GitHub Actions workflow commands
            for report in reports {
                for diag in &report.diagnostics {
                    println!(
                        "::{} file={},line={},col={},endLine={},endColumn={}::{} [{}]",
                        diag.severity.as_str(),
                        report.file,
                        diag.line,
                        diag.column,
                        diag.end_line,
                        diag.end_column,
                        diag.message,
                        diag.rule
                    );
                }
            }
        }
    }
}

fn print_json_summary(reports: &[FileReport], summary: LintSummary) {
    let files: Vec<serde_json::Value> = reports
        .iter()
        .filter(|report| !report.diagnostics.is_empty())
        .map(|report| {
            let (errors, warnings): (Vec<_>, Vec<_>) =
                report.diagnostics.iter().partition(|d| d.severity.is_error());
            serde_json::json!({
                "file": report.file,
                "errors": errors.iter().map(|d| d.to_json()).collect::<Vec<_>>(),
                "warnings": warnings.iter().map(|d| d.to_json()).collect::<Vec<_>>()
            })
        })
        .collect();

    let output = serde_json::json!({
        "success": summary.errors == 0,
        "files": files,
        "stats": {
            "files_checked": summary.files_checked,
            "total_errors": summary.errors,
            "total_warnings": summary.warnings
        }
    });

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize JSON output: {e}"),
    }
}

pub fn print_summary_line(summary: LintSummary) {
    let LintSummary {
        errors, warnings, ..
    } = summary;

    if errors == 0 && warnings == 0 {
        println!("{}", "✓ No linting issues found!".green().bold());
    } else if errors == 0 {
        println!(
            "{}",
            format!("✓ Linting passed with {warnings} warning(s)")
                .yellow()
                .bold()
        );
    } else if warnings == 0 {
        println!("{}", format!("✗ Found {errors} error(s)").red());
    } else {
        println!(
            "{}",
            format!("✗ Found {errors} error(s) and {warnings} warning(s)").red()
        );
    }
}

/// Run lint in watch mode
fn run_watch_mode(
    config_path: Option<PathBuf>,
    paths: &[PathBuf],
    rule_overrides: &[RuleOverride],
    format: OutputFormat,
) -> Result<ExitCode> {
    let watch_config = WatchConfig {
        format,
        config_path,
        paths: paths.to_vec(),
        rule_overrides: rule_overrides.to_vec(),
    };

    let mut watcher = FileWatcher::new(watch_config)?;
    watcher.start()?;
    watcher.run()?;
    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_linter::RuleSeverity;

    #[test]
    fn test_positions_are_one_based() {
        let report = lint_source(
            "q.rq".to_string(),
            "SELECT ?x WHERE {\n  ?x a <http://x\n}",
            &LintConfig::recommended(),
        );
        let unclosed = report
            .diagnostics
            .iter()
            .find(|d| d.rule == "unclosed_iri")
            .unwrap();
        assert_eq!((unclosed.line, unclosed.column), (2, 8));
        assert_eq!((unclosed.end_line, unclosed.end_column), (2, 17));
        assert!(!unclosed.fixable);
    }

    #[test]
    fn test_columns_count_utf16_units() {
        let report = lint_source(
            "q.rq".to_string(),
            "SELECT ?x WHERE { ?é 😀 ?y }",
            &LintConfig::recommended(),
        );
        let separator = report
            .diagnostics
            .iter()
            .find(|d| d.rule == "triple_separator")
            .unwrap();
        assert_eq!(separator.column, 19);
        // "?é 😀 ?y" is 8 UTF-16 units
        assert_eq!(separator.end_column, 19 + 8);
        assert!(separator.fixable);
    }

    #[test]
    fn test_summary_counts_and_exit_code() {
        let config = LintConfig::recommended();
        let reports = vec![
            lint_source("a.rq".to_string(), "SELECT ?x", &config),
            lint_source("b.rq".to_string(), "{ a } }", &config),
        ];
        let summary = LintSummary::from_reports(&reports);
        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.warnings, 3);
        assert_eq!(summary.exit_code(), ExitCode::LintError);
    }

    #[test]
    fn test_warnings_only_exit_success() {
        let config = LintConfig::recommended();
        let reports = vec![lint_source("a.rq".to_string(), "SELECT ?x", &config)];
        assert_eq!(
            LintSummary::from_reports(&reports).exit_code(),
            ExitCode::Success
        );
    }

    #[test]
    fn test_severity_override_reaches_report() {
        let config = LintConfig::recommended().with_rule("select_without_where", RuleSeverity::Error);
        let report = lint_source("a.rq".to_string(), "SELECT ?x", &config);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 0);
    }
}
