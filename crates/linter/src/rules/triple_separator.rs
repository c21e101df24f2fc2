use crate::diagnostics::{CodeFix, LintDiagnostic, LintSeverity, OffsetRange};
use crate::rules::{lines_with_offsets, starts_with_keyword, RESERVED_CLAUSE_KEYWORDS};
use crate::traits::LintRule;

/// Lint rule that expects each triple pattern line in a block to end with `.`, `;` or `,`
///
/// Only top-level `{ ... }` blocks are scanned, line by line, nested blocks
/// included as plain lines. Lines that open with a clause keyword, start or
/// end with a brace, or are comments are skipped. The last pattern of a group,
/// which SPARQL allows without a `.`, is reported as well.
pub struct TripleSeparatorRuleImpl;

impl LintRule for TripleSeparatorRuleImpl {
    fn name(&self) -> &'static str {
        "triple_separator"
    }

    fn description(&self) -> &'static str {
        "Expects triple patterns inside a block to end with '.', ';' or ','"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, source: &str) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for body in top_level_block_bodies(source) {
            for (line_offset, line) in lines_with_offsets(&source[body.start..body.end], body.start)
            {
                let trimmed = line.trim();
                if !needs_separator(trimmed) {
                    continue;
                }

                let start = line_offset + (line.len() - line.trim_start().len());
                let end = start + trimmed.len();
                diagnostics.push(
                    LintDiagnostic::warning(
                        OffsetRange::new(start, end),
                        "Triple pattern should end with a separator",
                        self.name(),
                    )
                    .with_fix(CodeFix::insert("Add ' .' after the triple pattern", end, " .")),
                );
            }
        }

        diagnostics
    }
}

fn needs_separator(trimmed: &str) -> bool {
    !(trimmed.is_empty()
        || trimmed.starts_with('#')
        || starts_with_keyword(trimmed, RESERVED_CLAUSE_KEYWORDS)
        || trimmed.starts_with(['{', '}'])
        || trimmed.ends_with(['{', '}'])
        || trimmed.ends_with(['.', ';', ',']))
}

/// Byte ranges of the bodies of top-level `{ ... }` blocks, braces excluded.
///
/// Stray `}` at depth zero are skipped; a block still open at the end of the
/// text has no body.
fn top_level_block_bodies(source: &str) -> Vec<OffsetRange> {
    let mut bodies = Vec::new();
    let mut depth = 0usize;
    let mut body_start = 0;

    for (offset, c) in source.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    body_start = offset + 1;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    bodies.push(OffsetRange::new(body_start, offset));
                }
            }
            _ => {}
        }
    }

    bodies
}
