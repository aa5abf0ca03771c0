//! Markdown table recognition and TypeTable rendering.
//!
//! Pipeline: [`locate`] finds candidate blocks, [`parse`] validates and splits
//! them, [`classify`] assigns semantic roles to columns, and [`render`] emits
//! the TypeTable fragment.

pub mod classify;
pub mod locate;
pub mod parse;
pub mod render;

pub use classify::{ColumnRoles, Field, classify};
pub use locate::table_blocks;
pub use parse::{ParsedTable, parse_table};
pub use render::render_type_table;
