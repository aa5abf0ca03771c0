//! Column-role inference from header text.
//!
//! Header vocabulary is a weak signal from free-form documentation prose, so
//! the rules are ordered: an explicit "type" label always wins over positional
//! guessing, and merging everything into the description is the fallback that
//! loses no information.

/// Semantic role of a non-key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Description,
    Default,
}

impl Field {
    /// Property name used in the generated fragment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Description => "description",
            Self::Default => "default",
        }
    }
}

/// How a table's non-key columns map onto TypeTable properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRoles {
    /// Distinct fields keyed by column index, ascending.
    Fields(Vec<(usize, Field)>),
    /// Columns folded into a single description, in the given order.
    Merge(Vec<usize>),
}

/// Headers treated as type-like when no explicit "type" appears.
const TYPE_LIKE: [&str; 6] = ["method", "binding", "protocol", "format", "strategy", "returns"];

/// Decide column roles from header text, case-insensitively.
///
/// Column 0 is always the key column and never receives a role.
#[must_use]
pub fn classify(headers: &[String]) -> ColumnRoles {
    let h: Vec<String> = headers.iter().map(|c| c.trim().to_lowercase()).collect();

    match h.len() {
        2 => ColumnRoles::Fields(vec![(1, Field::Description)]),
        3 => {
            if h[1].contains("type") {
                ColumnRoles::Fields(vec![(1, Field::Type), (2, Field::Description)])
            } else if h[2].contains("default") {
                ColumnRoles::Fields(vec![(1, Field::Description), (2, Field::Default)])
            } else if TYPE_LIKE.iter().any(|t| h[1].contains(t)) {
                ColumnRoles::Fields(vec![(1, Field::Type), (2, Field::Description)])
            } else {
                ColumnRoles::Merge(vec![1, 2])
            }
        }
        4 => {
            if h[1].contains("type") && h[3].contains("default") {
                ColumnRoles::Fields(vec![
                    (1, Field::Type),
                    (2, Field::Description),
                    (3, Field::Default),
                ])
            } else if h[3].contains("default") {
                ColumnRoles::Fields(vec![
                    (1, Field::Description),
                    (2, Field::Type),
                    (3, Field::Default),
                ])
            } else if h[1].contains("type") {
                ColumnRoles::Fields(vec![
                    (1, Field::Type),
                    (2, Field::Description),
                    (3, Field::Default),
                ])
            } else {
                ColumnRoles::Merge(vec![1, 2, 3])
            }
        }
        n => ColumnRoles::Merge((1..n).collect()),
    }
}
