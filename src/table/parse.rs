//! Candidate block validation and cell splitting.

use std::sync::LazyLock;

use regex::Regex;

/// Separator line: marker, dashes, colons, spaces, and pipes only.
static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|[-| :]+\|?\s*$").unwrap());

/// A markdown table split into header cells and data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse a candidate block into headers and rows.
///
/// Returns `None` when the block has fewer than 3 lines or the second line is
/// not a valid separator. Data lines not starting with the marker are dropped.
/// Zero data rows is a valid result; the caller decides whether to skip.
#[must_use]
pub fn parse_table(lines: &[&str]) -> Option<ParsedTable> {
    if lines.len() < 3 {
        return None;
    }
    if !SEPARATOR.is_match(lines[1]) {
        return None;
    }

    let headers = split_row(lines[0]);
    let rows = lines[2..]
        .iter()
        .filter(|l| l.trim().starts_with('|'))
        .map(|l| split_row(l))
        .collect();
    Some(ParsedTable { headers, rows })
}

/// Split one table line into trimmed cells.
fn split_row(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}
