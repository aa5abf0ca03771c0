pub mod cli;
pub mod error;
pub mod normalize;
pub mod rewrite;
pub mod table;

pub use error::{DocError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
