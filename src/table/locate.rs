//! Table block location.

/// Iterator over maximal runs of consecutive `|`-prefixed lines.
#[derive(Debug)]
pub struct TableBlocks<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

/// Find candidate table blocks in a document's lines.
///
/// Yields half-open `(start, end)` line-index ranges, one per maximal run of
/// consecutive lines beginning with the `|` marker. No validation beyond the
/// marker prefix; well-formedness is the parser's concern.
pub fn table_blocks<'a>(lines: &'a [&'a str]) -> TableBlocks<'a> {
    TableBlocks { lines, pos: 0 }
}

impl Iterator for TableBlocks<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        while self.pos < self.lines.len() && !self.lines[self.pos].starts_with('|') {
            self.pos += 1;
        }
        if self.pos >= self.lines.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < self.lines.len() && self.lines[self.pos].starts_with('|') {
            self.pos += 1;
        }
        Some((start, self.pos))
    }
}
