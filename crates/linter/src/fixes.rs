use crate::diagnostics::{LintDiagnostic, OffsetRange, TextEdit};

/// Apply the fixes attached to `diagnostics` and return the new text.
///
/// A fix is applied whole or not at all. Fixes are taken in diagnostic order;
/// one whose edits fall outside `source`, split a character, or overlap an
/// edit already accepted is skipped. Edits are applied from the end of the
/// text towards the start, so earlier offsets stay valid.
#[must_use]
pub fn apply_fixes(source: &str, diagnostics: &[LintDiagnostic]) -> String {
    let mut accepted: Vec<&TextEdit> = Vec::new();

    for diagnostic in diagnostics {
        let Some(fix) = &diagnostic.fix else {
            continue;
        };

        let applicable = fix.edits.iter().all(|edit| {
            is_valid_range(source, edit.offset_range)
                && !accepted
                    .iter()
                    .any(|other| other.offset_range.overlaps(&edit.offset_range))
        });

        if applicable {
            accepted.extend(&fix.edits);
        } else {
            tracing::debug!(rule = %diagnostic.rule, label = %fix.label, "skipping fix");
        }
    }

    // End to start; edits sharing a range go last-first so they read in fix order
    let mut ordered: Vec<(usize, &TextEdit)> = accepted.into_iter().enumerate().collect();
    ordered.sort_by(|(i, a), (j, b)| {
        b.offset_range.cmp(&a.offset_range).then_with(|| j.cmp(i))
    });

    let mut result = source.to_string();
    for (_, edit) in ordered {
        result.replace_range(edit.offset_range.start..edit.offset_range.end, &edit.new_text);
    }
    result
}

fn is_valid_range(source: &str, range: OffsetRange) -> bool {
    range.start <= range.end
        && range.end <= source.len()
        && source.is_char_boundary(range.start)
        && source.is_char_boundary(range.end)
}
