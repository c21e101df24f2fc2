use crate::files::{QueryInput, SourceFile};
use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use sparql_linter::{lint_with_config, LintConfig, LintDiagnostic};
use std::path::PathBuf;

/// A file together with the diagnostics whose fixes apply to it
pub struct FileFix {
    pub path: PathBuf,
    /// Text the diagnostics were computed against
    pub source: String,
    /// Diagnostics that carry a fix, in report order
    pub diagnostics: Vec<LintDiagnostic>,
}

/// Lint every file source and keep the diagnostics that carry a fix.
///
/// Standard input is never rewritten, so it contributes nothing here.
pub fn collect_fixable_diagnostics(sources: &[SourceFile], config: &LintConfig) -> Vec<FileFix> {
    let mut fixes = Vec::new();

    for source in sources {
        let QueryInput::File(path) = &source.input else {
            tracing::debug!("Skipping fixes for standard input");
            continue;
        };

        let fixable: Vec<_> = lint_with_config(&source.text, config)
            .into_iter()
            .filter(LintDiagnostic::has_fix)
            .collect();

        if !fixable.is_empty() {
            fixes.push(FileFix {
                path: path.clone(),
                source: source.text.clone(),
                diagnostics: fixable,
            });
        }
    }

    fixes
}

/// Display what would be fixed in dry-run mode
pub fn display_dry_run(fixes: &[FileFix], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            println!();
            println!("{}", "Dry run - would fix the following issues:".cyan());
            println!();

            for file_fix in fixes {
                println!("{}:", file_fix.path.display().to_string().bold());
                for diag in &file_fix.diagnostics {
                    if let Some(fix) = &diag.fix {
                        println!("  {} {} ({})", "→".green(), fix.label, diag.rule.dimmed());
                    }
                }
                println!();
            }
        }
        OutputFormat::Json | OutputFormat::Github => {
            for file_fix in fixes {
                for diag in &file_fix.diagnostics {
                    if let Some(fix) = &diag.fix {
                        println!(
                            "{}",
                            serde_json::json!({
                                "action": "would_fix",
                                "file": file_fix.path.to_string_lossy(),
                                "rule": diag.rule,
                                "fix": fix.label,
                                "offset_start": diag.range.start,
                                "offset_end": diag.range.end,
                            })
                        );
                    }
                }
            }
        }
    }
}

/// Apply fixes and write each file back.
///
/// Returns the fixed text of every file written.
pub fn apply_fixes(fixes: &[FileFix], format: OutputFormat) -> Result<Vec<(PathBuf, String)>> {
    fixes
        .iter()
        .map(|file_fix| {
            let fixed = apply_file_fixes(file_fix, format)?;
            Ok((file_fix.path.clone(), fixed))
        })
        .collect()
}

/// Apply all fixes to a single file
fn apply_file_fixes(file_fix: &FileFix, format: OutputFormat) -> Result<String> {
    let fixed = sparql_linter::apply_fixes(&file_fix.source, &file_fix.diagnostics);

    std::fs::write(&file_fix.path, &fixed)
        .with_context(|| format!("Failed to write {}", file_fix.path.display()))?;
    tracing::debug!(
        file = %file_fix.path.display(),
        fixes = file_fix.diagnostics.len(),
        "Wrote fixed file"
    );

    // Report what was fixed
    match format {
        OutputFormat::Human => {
            println!(
                "{} {} ({})",
                "✓".green(),
                file_fix.path.display(),
                format!("{} fix(es)", file_fix.diagnostics.len()).dimmed()
            );
        }
        OutputFormat::Json | OutputFormat::Github => {
            for diag in &file_fix.diagnostics {
                if let Some(fix) = &diag.fix {
                    println!(
                        "{}",
                        serde_json::json!({
                            "action": "fixed",
                            "file": file_fix.path.to_string_lossy(),
                            "rule": diag.rule,
                            "fix": fix.label,
                        })
                    );
                }
            }
        }
    }

    Ok(fixed)
}
