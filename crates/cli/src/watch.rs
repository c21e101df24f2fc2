//! Watch mode for `sparql lint`.
//!
//! Uses the `notify` crate for cross-platform file system events and
//! debounces bursts of changes before re-linting.

use crate::commands::common::{CommandContext, RuleOverride};
use crate::commands::lint::{lint_sources, print_reports, FileReport, LintSummary};
use crate::files::{collect_inputs, is_query_file, SourceFile};
use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use sparql_config::CONFIG_FILES;
use sparql_linter::LintConfig;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

/// Debounce duration for file changes (milliseconds)
const DEBOUNCE_MS: u64 = 100;

/// Result of a single lint run
pub struct CheckResult {
    pub summary: LintSummary,
    pub changed_files: Vec<PathBuf>,
    pub duration: Duration,
}

/// Watch configuration, as given on the command line
pub struct WatchConfig {
    pub format: OutputFormat,
    pub config_path: Option<PathBuf>,
    pub paths: Vec<PathBuf>,
    pub rule_overrides: Vec<RuleOverride>,
}

/// File watcher that re-lints on file changes
pub struct FileWatcher {
    config: WatchConfig,
    ctx: CommandContext,
    lint_config: LintConfig,
    watcher: RecommendedWatcher,
    rx: Receiver<Result<Event, notify::Error>>,
    watch_paths: HashSet<PathBuf>,
}

impl FileWatcher {
    /// Create a new file watcher.
    ///
    /// Fails if the initial config cannot be loaded; later config errors
    /// are reported and the previous config is kept.
    pub fn new(config: WatchConfig) -> Result<Self> {
        let ctx = CommandContext::load(config.config_path.clone())?;
        let lint_config = ctx.lint_config(&config.rule_overrides)?;

        let watch_paths =
            Self::collect_watch_paths(&config.paths, &ctx.base_dir, ctx.config_path.as_deref());

        // Set up file watcher
        let (tx, rx) = mpsc::channel();
        let watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .context("Failed to create file watcher")?;

        Ok(Self {
            config,
            ctx,
            lint_config,
            watcher,
            rx,
            watch_paths,
        })
    }

    /// Directories to watch: named directories as-is, named files through
    /// their parent, or the config root when no paths are given. The config
    /// file's directory is always watched so edits to it are picked up.
    fn collect_watch_paths(
        paths: &[PathBuf],
        base_dir: &Path,
        config_path: Option<&Path>,
    ) -> HashSet<PathBuf> {
        let mut watch_paths = HashSet::new();

        for path in paths {
            if path.is_dir() {
                watch_paths.insert(path.clone());
            } else if let Some(parent) = Self::parent_dir(path) {
                watch_paths.insert(parent);
            }
        }

        if watch_paths.is_empty() {
            watch_paths.insert(base_dir.to_path_buf());
        }

        if let Some(parent) = config_path.and_then(Self::parent_dir) {
            watch_paths.insert(parent);
        }

        watch_paths
    }

    /// Directory containing `path`; a bare file name lives in `.`
    fn parent_dir(path: &Path) -> Option<PathBuf> {
        path.parent().map(|parent| {
            if parent.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                parent.to_path_buf()
            }
        })
    }

    /// Start watching for file changes
    pub fn start(&mut self) -> Result<()> {
        for path in &self.watch_paths {
            self.watcher
                .watch(path, RecursiveMode::Recursive)
                .with_context(|| format!("Failed to watch path: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "Watching");
        }
        Ok(())
    }

    /// Run the watch loop
    pub fn run(&mut self) -> Result<()> {
        self.print_header();

        // Run initial check
        let result = self.run_checks(&[]);
        self.print_result(&result, true);

        // Track pending changes for debouncing
        let mut pending_changes: HashSet<PathBuf> = HashSet::new();
        let mut last_change_time: Option<Instant> = None;

        loop {
            let timeout = if last_change_time.is_some() {
                Duration::from_millis(DEBOUNCE_MS)
            } else {
                Duration::from_secs(60)
            };

            match self.rx.recv_timeout(timeout) {
                Ok(Ok(event)) => {
                    for path in event.paths {
                        if Self::is_relevant_file(&path) {
                            pending_changes.insert(path);
                            last_change_time = Some(Instant::now());
                        }
                    }
                }
                Ok(Err(e)) => {
                    eprintln!("{} {}", "Watch error:".red(), e);
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if let Some(last_time) = last_change_time {
                        if last_time.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
                            && !pending_changes.is_empty()
                        {
                            let mut changed: Vec<PathBuf> = pending_changes.drain().collect();
                            changed.sort();
                            last_change_time = None;

                            if changed.iter().any(|path| is_config_file(path)) {
                                self.reload_config();
                            }

                            let result = self.run_checks(&changed);
                            self.print_result(&result, false);
                        }
                    }
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Check if a file is relevant for watching
    fn is_relevant_file(path: &Path) -> bool {
        is_query_file(path) || is_config_file(path)
    }

    /// Reload the project config, keeping the previous one if the new one is invalid
    fn reload_config(&mut self) {
        let reloaded = CommandContext::load(self.config.config_path.clone()).and_then(|ctx| {
            let lint_config = ctx.lint_config(&self.config.rule_overrides)?;
            Ok((ctx, lint_config))
        });

        match reloaded {
            Ok((ctx, lint_config)) => {
                tracing::info!("Config reloaded");
                self.ctx = ctx;
                self.lint_config = lint_config;
            }
            Err(e) => {
                eprintln!(
                    "{} {e:#} {}",
                    "Config error:".red(),
                    "(keeping previous config)".dimmed()
                );
            }
        }
    }

    /// Re-collect inputs from disk and lint them
    fn run_checks(&self, changed_files: &[PathBuf]) -> CheckResult {
        let start = Instant::now();

        let inputs = match collect_inputs(&self.config.paths, &self.ctx.config, &self.ctx.base_dir)
        {
            Ok(inputs) => inputs,
            Err(e) => {
                eprintln!("{} {e:#}", "error:".red().bold());
                Vec::new()
            }
        };

        // A file may vanish between collection and reading
        let sources: Vec<SourceFile> = inputs
            .into_iter()
            .filter_map(|input| match input.read() {
                Ok(text) => Some(SourceFile { input, text }),
                Err(e) => {
                    eprintln!("{} {e:#}", "error:".red().bold());
                    None
                }
            })
            .collect();

        let reports = lint_sources(&sources, &self.lint_config);
        self.print_diagnostics(&reports);

        CheckResult {
            summary: LintSummary::from_reports(&reports),
            changed_files: changed_files.to_vec(),
            duration: start.elapsed(),
        }
    }

    /// Print diagnostics based on output format
    fn print_diagnostics(&self, reports: &[FileReport]) {
        match self.config.format {
            OutputFormat::Human | OutputFormat::Github => {
                print_reports(reports, self.config.format);
            }
            OutputFormat::Json => {
                // One JSON object per line so consumers can stream events
                for report in reports {
                    for diag in &report.diagnostics {
                        let mut value = diag.to_json();
                        value["type"] = "diagnostic".into();
                        value["file"] = report.file.clone().into();
                        println!("{value}");
                    }
                }
            }
        }
    }

    /// Print the watch mode header
    fn print_header(&self) {
        match self.config.format {
            OutputFormat::Human | OutputFormat::Github => {
                println!();
                println!(
                    "{} Watching for changes... (press {} to stop)",
                    "●".cyan(),
                    "Ctrl+C".bold()
                );
                println!("  Running {} on file changes", "linting".cyan());
                println!();
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "type": "start",
                        "mode": "lint",
                        "timestamp": chrono_now()
                    })
                );
            }
        }
    }

    /// Print the result of a lint run
    fn print_result(&self, result: &CheckResult, is_initial: bool) {
        let LintSummary {
            files_checked,
            errors,
            warnings,
        } = result.summary;

        match self.config.format {
            OutputFormat::Human | OutputFormat::Github => {
                let timestamp = format!("[{}]", chrono_now()).dimmed();

                if !is_initial && !result.changed_files.is_empty() {
                    println!();
                    for file in &result.changed_files {
                        println!(
                            "{} {} changed",
                            timestamp,
                            file.file_name()
                                .map_or_else(
                                    || file.display().to_string(),
                                    |n| n.to_string_lossy().to_string(),
                                )
                                .cyan()
                        );
                    }
                }

                println!();
                if errors == 0 && warnings == 0 {
                    println!("{} {}", timestamp, "✓ No linting issues found!".green().bold());
                } else if errors == 0 {
                    println!(
                        "{} {}",
                        timestamp,
                        format!("✓ Passed with {warnings} warning(s)").yellow().bold()
                    );
                } else {
                    println!(
                        "{} {}",
                        timestamp,
                        format!("✗ {errors} error(s), {warnings} warning(s)").red()
                    );
                }

                println!(
                    "  {} {} file(s) in {:.2}s",
                    "⏱".dimmed(),
                    files_checked,
                    result.duration.as_secs_f64()
                );
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "type": "result",
                        "timestamp": chrono_now(),
                        "initial": is_initial,
                        "changed_files": result.changed_files.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
                        "files_checked": files_checked,
                        "lint_errors": errors,
                        "lint_warnings": warnings,
                        "passed": errors == 0,
                        "duration_ms": result.duration.as_millis()
                    })
                );
            }
        }
    }
}

/// Check if a path carries one of the config file names
fn is_config_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| CONFIG_FILES.contains(&name))
}

/// Current UTC time of day as `HH:MM:SS`
fn chrono_now() -> String {
    use std::time::SystemTime;
    let now = SystemTime::now();
    let datetime = now
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = datetime.as_secs();
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
