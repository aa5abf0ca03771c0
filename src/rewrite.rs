//! Whole-document conversion.
//!
//! Locates table blocks, renders each valid one as a TypeTable fragment in a
//! single forward pass over the lines, and injects the component import when
//! anything was rewritten.

use tracing::debug;

use crate::table::{parse_table, render_type_table, table_blocks};

/// Import statement required by the generated fragments.
pub const IMPORT_LINE: &str = "import { TypeTable } from 'fumadocs-ui/components/type-table';";

/// Convert every markdown table in `content` to a TypeTable fragment.
///
/// Returns the rewritten document, or `None` when nothing changed. Blocks
/// that fail validation or carry no data rows pass through untouched.
/// Generated fragments never start a line with the `|` marker, so running the
/// conversion again is a no-op.
#[must_use]
pub fn convert_document(content: &str) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();

    let blocks: Vec<(usize, usize)> = table_blocks(&lines).collect();
    if blocks.is_empty() {
        return None;
    }

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut modified = false;
    let mut cursor = 0;

    for &(start, end) in &blocks {
        out.extend(lines[cursor..start].iter().map(ToString::to_string));
        match parse_table(&lines[start..end]) {
            Some(table) if !table.rows.is_empty() => {
                debug!(start, end, rows = table.rows.len(), "rewriting table block");
                out.push(render_type_table(&table));
                modified = true;
            }
            _ => {
                out.extend(lines[start..end].iter().map(ToString::to_string));
            }
        }
        cursor = end;
    }
    out.extend(lines[cursor..].iter().map(ToString::to_string));

    if !modified {
        return None;
    }

    if !content.contains(IMPORT_LINE) {
        inject_import(&mut out);
    }

    let mut result = out.join("\n");
    if content.ends_with('\n') {
        result.push('\n');
    }
    Some(result)
}

/// Insert the TypeTable import once.
///
/// Prefers the position right after the last existing fumadocs import;
/// otherwise goes after the closing front-matter fence, separated from it by
/// a blank line. A document with neither anchor is left without the import.
fn inject_import(lines: &mut Vec<String>) {
    let last_import = lines
        .iter()
        .rposition(|l| l.trim_start().starts_with("import ") && l.contains("fumadocs"));
    if let Some(idx) = last_import {
        lines.insert(idx + 1, IMPORT_LINE.to_string());
        return;
    }

    let mut fences = lines.iter().enumerate().filter(|(_, l)| l.trim() == "---");
    fences.next();
    if let Some((idx, _)) = fences.next() {
        lines.insert(idx + 1, String::new());
        lines.insert(idx + 2, IMPORT_LINE.to_string());
    }
}
