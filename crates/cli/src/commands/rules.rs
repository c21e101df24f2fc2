use crate::exit_code::ExitCode;
use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use sparql_linter::{all_rules, LintRule};

/// List every rule with its default severity and description
pub fn run(format: OutputFormat) -> Result<ExitCode> {
    let rules = all_rules();

    match format {
        OutputFormat::Human | OutputFormat::Github => {
            let width = rules.iter().map(|rule| rule.name().len()).max().unwrap_or(0);
            for rule in rules {
                let severity = rule.default_severity();
                let label = format!("{:<7}", severity.as_str());
                let label = if severity.is_error() {
                    label.red()
                } else {
                    label.yellow()
                };
                println!(
                    "{}  {}  {}",
                    format!("{:<width$}", rule.name()).bold(),
                    label,
                    rule.description()
                );
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "rules": rules.iter().map(|rule| rule_json(&**rule)).collect::<Vec<_>>()
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(ExitCode::Success)
}

fn rule_json(rule: &dyn LintRule) -> serde_json::Value {
    serde_json::json!({
        "name": rule.name(),
        "severity": rule.default_severity().as_str(),
        "description": rule.description(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_linter::find_rule;

    #[test]
    fn test_rule_json() {
        let rule = find_rule("unbalanced_braces").unwrap();
        let json = rule_json(&**rule);
        assert_eq!(json["name"], "unbalanced_braces");
        assert_eq!(json["severity"], "error");
        assert!(!json["description"].as_str().unwrap().is_empty());
    }
}
