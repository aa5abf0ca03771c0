//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::cli::{Cli, Commands};
use crate::error::{DocError, Result};

pub mod convert;
pub mod fix_keys;

/// Per-run summary, also emitted as JSON in machine mode.
#[derive(Serialize, Debug, Default)]
pub struct Summary {
    pub changed: usize,
    pub failed: usize,
    pub files: Vec<String>,
}

/// Dispatch a command to its handler
pub fn run(cli: &Cli, command: &Commands) -> Result<()> {
    match command {
        Commands::Convert(args) => convert::run(cli, args),
        Commands::FixKeys(args) => fix_keys::run(cli, args),
    }
}

/// Recursively collect MDX files under `root`, sorted by path.
pub(crate) fn mdx_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(DocError::InvalidRoot(root.display().to_string()));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "mdx") {
            out.push(entry.path().to_path_buf());
        }
    }
    out.sort();
    Ok(out)
}

/// True when any path segment equals "blog".
pub(crate) fn in_blog(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == "blog")
}

/// Path rendered relative to the scan root for progress output.
pub(crate) fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn mdx_files_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("docs")).unwrap();
        std::fs::write(temp.path().join("docs/b.mdx"), "").unwrap();
        std::fs::write(temp.path().join("docs/a.mdx"), "").unwrap();
        std::fs::write(temp.path().join("docs/notes.md"), "").unwrap();

        let files = mdx_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.mdx", "b.mdx"]);
    }

    #[test]
    fn mdx_files_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(mdx_files(&missing).is_err());
    }

    #[test]
    fn in_blog_matches_whole_segments_only() {
        assert!(in_blog(Path::new("docs/blog/post.mdx")));
        assert!(in_blog(Path::new("blog/post.mdx")));
        assert!(!in_blog(Path::new("docs/blogging/post.mdx")));
        assert!(!in_blog(Path::new("docs/api/post.mdx")));
    }
}
