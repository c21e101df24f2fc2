mod commands;
mod exit_code;
mod files;
mod watch;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::common::{parse_rule_override, RuleOverride};
use exit_code::ExitCode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sparql")]
#[command(about = "Heuristic linter for SPARQL query files", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: search upward for .sparqlrc.* or sparql.config.*)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except diagnostics and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show informational output (success messages, summaries)
    pub show_info: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint SPARQL query files
    ///
    /// PATHS may be files, directories (searched for .rq, .sparql and .ru
    /// files) or `-` for standard input. Without PATHS, the config's
    /// include globs are used.
    Lint {
        /// Files, directories, or `-` for standard input
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Watch mode - re-lint on file changes
        #[arg(short, long)]
        watch: bool,

        /// Automatically fix lint issues that have safe fixes
        #[arg(long, conflicts_with = "fix_dry_run")]
        fix: bool,

        /// Show what would be fixed without modifying files
        #[arg(long, conflicts_with = "fix")]
        fix_dry_run: bool,

        /// Override a rule's severity (repeatable), e.g. `--rule triple_separator=off`
        #[arg(long = "rule", value_name = "NAME=SEVERITY", value_parser = parse_rule_override)]
        rule: Vec<RuleOverride>,
    },

    /// List available lint rules
    Rules {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
    /// GitHub Actions workflow commands for PR annotations
    Github,
}

fn main() {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let output_opts = OutputOptions {
        show_info: !cli.quiet,
    };

    let result = match cli.command {
        Commands::Lint {
            paths,
            format,
            watch,
            fix,
            fix_dry_run,
            rule,
        } => commands::lint::run(
            cli.config,
            &paths,
            &rule,
            format,
            watch,
            fix,
            fix_dry_run,
            output_opts,
        ),
        Commands::Rules { format } => commands::rules::run(format),
    };

    match result {
        Ok(code) => {
            tracing::debug!(exit = %code, "Done");
            code.exit()
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            let code = ExitCode::for_error(&e);
            tracing::debug!(exit = %code, "Failed");
            code.exit()
        }
    }
}

/// Initialize tracing from `RUST_LOG`, off by default
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Priority order (highest to lowest):
/// 1. `--color` flag (force colors on)
/// 2. `--no-color` flag (force colors off)
/// 3. `NO_COLOR` environment variable (if set to any value, disable colors)
/// 4. `CLICOLOR_FORCE` environment variable (if set to non-zero, force colors)
/// 5. `CLICOLOR` environment variable (if set to "0", disable colors)
/// 6. Default: colors enabled if stdout is a TTY (handled by `colored` crate)
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color || std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    } else if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if !val.is_empty() && val != "0" {
            control::set_override(true);
        }
    } else if std::env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        control::set_override(false);
    }
}
