//! Text edit types for auto-fixes.

use crate::OffsetRange;

/// A single replacement of a byte range in a query buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Byte offset range to replace
    pub offset_range: OffsetRange,
    /// The text to replace the range with (empty string means deletion)
    pub new_text: String,
}

impl TextEdit {
    /// Create a new text edit that replaces a range with new text.
    #[must_use]
    pub fn new(start: usize, end: usize, new_text: impl Into<String>) -> Self {
        Self {
            offset_range: OffsetRange::new(start, end),
            new_text: new_text.into(),
        }
    }

    /// Create an insertion edit (insert text at position without removing anything).
    #[must_use]
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self {
            offset_range: OffsetRange::at(position),
            new_text: text.into(),
        }
    }
}

/// A labelled group of edits that resolve one diagnostic.
///
/// All edits of a fix are applied together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFix {
    /// Human-readable description of what the fix does
    pub label: String,
    /// The text edits to apply (in order)
    pub edits: Vec<TextEdit>,
}

impl CodeFix {
    /// Create a new code fix with a label and edits.
    #[must_use]
    pub fn new(label: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        Self {
            label: label.into(),
            edits,
        }
    }

    /// Create a simple replacement fix.
    #[must_use]
    pub fn replace(
        label: impl Into<String>,
        start: usize,
        end: usize,
        new_text: impl Into<String>,
    ) -> Self {
        Self::new(label, vec![TextEdit::new(start, end, new_text)])
    }

    /// Create a simple insertion fix.
    #[must_use]
    pub fn insert(label: impl Into<String>, position: usize, text: impl Into<String>) -> Self {
        Self::new(label, vec![TextEdit::insert(position, text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_edit_insert() {
        let edit = TextEdit::insert(10, ":");
        assert_eq!(edit.offset_range, OffsetRange::at(10));
        assert_eq!(edit.new_text, ":");
    }

    #[test]
    fn test_code_fix_replace() {
        let fix = CodeFix::replace("Wrap IRI in angle brackets", 12, 21, "<http://x/>");
        assert_eq!(fix.edits.len(), 1);
        assert_eq!(fix.edits[0].offset_range, OffsetRange::new(12, 21));
        assert_eq!(fix.edits[0].new_text, "<http://x/>");
    }
}
