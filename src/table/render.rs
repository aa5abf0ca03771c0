//! TypeTable fragment rendering and value escaping.

use std::sync::LazyLock;

use regex::Regex;

use super::classify::{ColumnRoles, classify};
use super::parse::ParsedTable;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").unwrap());

/// Normalize a table key into a quoted object key.
///
/// Bold and inline-code markers are unwrapped, embedded quotes escaped.
fn jsx_key(raw: &str) -> String {
    let s = raw.trim();
    let s = BOLD.replace_all(s, "$1");
    let s = CODE.replace_all(&s, "$1");
    let s = s.replace('"', "\\\"");
    format!("\"{s}\"")
}

/// Escape a cell value as a JSX attribute value.
///
/// Values carrying markup or code fragments (backticks, angle brackets,
/// braces) are unsafe in a plain quoted attribute and go out as template
/// literals; everything else becomes a quoted string with embedded quotes
/// entity-escaped.
fn jsx_string(raw: &str) -> String {
    let s = raw.trim();
    let s = BOLD.replace_all(s, "$1");
    if s.contains('`') || s.contains('<') || s.contains('>') || s.contains('{') {
        let escaped = s
            .replace('\\', "\\\\")
            .replace('`', "\\`")
            .replace('$', "\\$");
        format!("{{`{escaped}`}}")
    } else {
        let escaped = s.replace('"', "&quot;");
        format!("\"{escaped}\"")
    }
}

/// A cell that produces no field: empty or a dash placeholder.
fn is_blank(cell: &str) -> bool {
    cell.is_empty() || cell == "—" || cell == "-"
}

/// Render one table row as a TypeTable entry.
///
/// The key is always retained; when no field survives escaping and omission
/// the entry renders as an empty object.
fn render_entry(row: &[String], roles: &ColumnRoles, headers: &[String]) -> String {
    let mut props = Vec::new();

    match roles {
        ColumnRoles::Merge(indices) => {
            let mut parts = Vec::new();
            for &idx in indices {
                let Some(cell) = row.get(idx) else { continue };
                let val = cell.trim();
                if is_blank(val) {
                    continue;
                }
                if let Some(header) = headers.get(idx) {
                    parts.push(format!("{}: {val}", header.trim()));
                } else {
                    parts.push(val.to_string());
                }
            }
            if !parts.is_empty() {
                let merged = parts.join(" · ");
                props.push(format!("      description: {},", jsx_string(&merged)));
            }
        }
        ColumnRoles::Fields(fields) => {
            for &(idx, field) in fields {
                let Some(cell) = row.get(idx) else { continue };
                let val = cell.trim();
                if is_blank(val) {
                    continue;
                }
                props.push(format!("      {}: {},", field.name(), jsx_string(val)));
            }
        }
    }

    let key = jsx_key(&row[0]);
    if props.is_empty() {
        format!("    {key}: {{}},\n")
    } else {
        format!("    {key}: {{\n{}\n    }},\n", props.join("\n"))
    }
}

/// Render a parsed table as a complete TypeTable fragment.
///
/// Rows with an empty key cell are skipped.
#[must_use]
pub fn render_type_table(table: &ParsedTable) -> String {
    let roles = classify(&table.headers);

    let mut inner = String::new();
    for row in &table.rows {
        match row.first() {
            None => continue,
            Some(key) if key.is_empty() => continue,
            Some(_) => {}
        }
        inner.push_str(&render_entry(row, &roles, &table.headers));
    }

    format!("<TypeTable\n  type={{{{\n{inner}  }}}}\n/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> ParsedTable {
        ParsedTable {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    #[test]
    fn renders_description_entry() {
        let t = table(&["Name", "Description"], &[&["foo", "does a thing"]]);
        let out = render_type_table(&t);
        assert!(out.contains("\"foo\": {"));
        assert!(out.contains("description: \"does a thing\","));
        assert!(out.starts_with("<TypeTable\n  type={{\n"));
        assert!(out.ends_with("  }}\n/>"));
    }

    #[test]
    fn dash_values_omit_the_field() {
        let t = table(&["Name", "Description"], &[&["a", "—"], &["b", "-"]]);
        let out = render_type_table(&t);
        assert!(out.contains("\"a\": {},"));
        assert!(out.contains("\"b\": {},"));
        assert!(!out.contains("description"));
    }

    #[test]
    fn key_strips_bold_and_code_markers() {
        let t = table(&["Name", "Description"], &[&["**`--flag`**", "x"]]);
        let out = render_type_table(&t);
        assert!(out.contains("\"--flag\": {"));
    }

    #[test]
    fn key_escapes_quotes() {
        let t = table(&["Name", "Description"], &[&["say \"hi\"", "x"]]);
        let out = render_type_table(&t);
        assert!(out.contains("\"say \\\"hi\\\"\": {"));
    }

    #[test]
    fn backtick_value_uses_template_literal() {
        let t = table(&["Name", "Description"], &[&["k", "use `foo()` here"]]);
        let out = render_type_table(&t);
        assert!(out.contains("description: {`use \\`foo()\\` here`},"));
    }

    #[test]
    fn angle_bracket_value_uses_template_literal() {
        let t = table(&["Name", "Description"], &[&["k", "a <b> c"]]);
        let out = render_type_table(&t);
        assert!(out.contains("description: {`a <b> c`},"));
    }

    #[test]
    fn template_literal_escapes_backslash_and_dollar() {
        let t = table(&["Name", "Description"], &[&["k", "`${x}` \\n"]]);
        let out = render_type_table(&t);
        assert!(out.contains(r"description: {`\`\${x}\` \\n`},"));
    }

    #[test]
    fn plain_value_escapes_quotes_as_entity() {
        let t = table(&["Name", "Description"], &[&["k", "say \"hi\""]]);
        let out = render_type_table(&t);
        assert!(out.contains("description: \"say &quot;hi&quot;\","));
    }

    #[test]
    fn bold_markers_stripped_from_values() {
        let t = table(&["Name", "Description"], &[&["k", "**important** note"]]);
        let out = render_type_table(&t);
        assert!(out.contains("description: \"important note\","));
    }

    #[test]
    fn merge_joins_labeled_fragments() {
        let t = table(
            &["Name", "A", "B", "C", "D"],
            &[&["k", "1", "2", "3", "4"]],
        );
        let out = render_type_table(&t);
        assert!(out.contains("description: \"A: 1 · B: 2 · C: 3 · D: 4\","));
    }

    #[test]
    fn merge_skips_blank_cells() {
        let t = table(&["Name", "A", "B", "C", "D"], &[&["k", "1", "—", "", "4"]]);
        let out = render_type_table(&t);
        assert!(out.contains("description: \"A: 1 · D: 4\","));
    }

    #[test]
    fn typed_columns_render_named_fields() {
        let t = table(
            &["Option", "Type", "Description", "Default"],
            &[&["depth", "number", "how deep", "3"]],
        );
        let out = render_type_table(&t);
        assert!(out.contains("type: \"number\","));
        assert!(out.contains("description: \"how deep\","));
        assert!(out.contains("default: \"3\","));
    }

    #[test]
    fn short_rows_render_present_cells_only() {
        let t = table(
            &["Option", "Type", "Description"],
            &[&["depth", "number"]],
        );
        let out = render_type_table(&t);
        assert!(out.contains("type: \"number\","));
        assert!(!out.contains("description:"));
    }

    #[test]
    fn rows_with_empty_key_are_skipped() {
        let t = table(&["Name", "Description"], &[&["", "x"], &["k", "y"]]);
        let out = render_type_table(&t);
        assert!(!out.contains("\"\": "));
        assert!(out.contains("\"k\": {"));
    }

    #[test]
    fn generated_fragment_has_no_marker_prefixed_lines() {
        let t = table(
            &["Name", "Type", "Description"],
            &[&["k", "`string`", "a | b"]],
        );
        let out = render_type_table(&t);
        assert!(out.lines().all(|l| !l.starts_with('|')));
    }
}
