//! Position and range types for source locations.

/// Byte offset range in a query buffer.
///
/// Half-open: `start` is inclusive, `end` is exclusive. Lint rules only ever
/// produce ranges whose bounds sit on `char` boundaries of the text they were
/// computed from, so slicing with [`OffsetRange::slice`] never panics for that text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct OffsetRange {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl OffsetRange {
    /// Create a new offset range.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a zero-width range at a specific offset.
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the length of this range in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this is a zero-width range.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the two ranges share at least one byte.
    ///
    /// Zero-width ranges overlap a range that strictly contains their offset.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() {
            return other.start < self.start && self.start < other.end;
        }
        if other.is_empty() {
            return self.start < other.start && other.start < self.end;
        }
        self.start < other.end && other.start < self.end
    }

    /// The text covered by this range, or `None` if it does not fit `text`.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

impl std::fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Position in a query buffer (editor coordinates, 0-indexed).
///
/// - `line` is 0-indexed (first line is 0)
/// - `character` is 0-indexed UTF-16 code units from line start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: u32,
    /// Character offset within the line (0-indexed, UTF-16 code units)
    pub character: u32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.character.cmp(&other.character))
    }
}

/// Range in a query buffer (editor coordinates), `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Range {
    /// Create a new range.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Line start table for converting byte offsets into editor positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Create a new line index from source text
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    /// Convert a byte offset to a 0-based `(line, byte column)` pair
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i.saturating_sub(1));

        (line, offset - self.line_starts[line])
    }

    /// Convert a byte offset in `text` to an editor [`Position`].
    ///
    /// `text` must be the text this index was built from. Offsets past the end
    /// clamp to the end of the text.
    #[must_use]
    pub fn position(&self, text: &str, offset: usize) -> Position {
        let offset = offset.min(text.len());
        let (line, _) = self.line_col(offset);
        let line_start = self.line_starts[line];
        let character = text
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.encode_utf16().count());

        Position::new(line as u32, character as u32)
    }

    /// Convert an [`OffsetRange`] in `text` to an editor [`Range`].
    #[must_use]
    pub fn range(&self, text: &str, range: OffsetRange) -> Range {
        Range::new(
            self.position(text, range.start),
            self.position(text, range.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_range_at() {
        let range = OffsetRange::at(15);
        assert_eq!(range.len(), 0);
        assert!(range.is_empty());
    }

    #[test]
    fn test_offset_range_display() {
        assert_eq!(format!("{}", OffsetRange::new(10, 20)), "10..20");
    }

    #[test]
    fn test_offset_range_overlaps() {
        let a = OffsetRange::new(0, 5);
        assert!(a.overlaps(&OffsetRange::new(4, 8)));
        assert!(!a.overlaps(&OffsetRange::new(5, 8)));
        assert!(a.overlaps(&OffsetRange::at(3)));
        // insertion exactly at a boundary does not clash
        assert!(!a.overlaps(&OffsetRange::at(5)));
        assert!(!OffsetRange::at(2).overlaps(&OffsetRange::at(2)));
    }

    #[test]
    fn test_offset_range_slice() {
        let text = "SELECT ?x";
        assert_eq!(OffsetRange::new(0, 6).slice(text), Some("SELECT"));
        assert_eq!(OffsetRange::new(0, 60).slice(text), None);
    }

    #[test]
    fn test_position_ordering() {
        let p1 = Position::new(0, 5);
        let p2 = Position::new(0, 10);
        let p3 = Position::new(1, 0);

        assert!(p1 < p2);
        assert!(p2 < p3);
        assert_eq!(p1.cmp(&p1), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_line_index_line_col() {
        let index = LineIndex::new("SELECT ?x\nWHERE {\n}");
        assert_eq!(index.line_col(0), (0, 0));
        assert_eq!(index.line_col(10), (1, 0));
        assert_eq!(index.line_col(16), (1, 6));
    }

    #[test]
    fn test_line_index_position_counts_utf16() {
        let text = "# é😀\n?s";
        let index = LineIndex::new(text);
        // 'é' is 2 bytes / 1 unit, '😀' is 4 bytes / 2 units
        assert_eq!(index.position(text, 8), Position::new(0, 5));
        assert_eq!(index.position(text, 9), Position::new(1, 0));
        assert_eq!(index.position(text, 100), Position::new(1, 2));
    }

    #[test]
    fn test_line_index_range() {
        let text = "{\n  ?s ?p ?o\n}";
        let index = LineIndex::new(text);
        let range = index.range(text, OffsetRange::new(4, 12));
        assert_eq!(range.start, Position::new(1, 2));
        assert_eq!(range.end, Position::new(1, 10));
    }
}
