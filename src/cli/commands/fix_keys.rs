//! doctable fix-keys - rewrite malformed computed object keys

use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use tracing::warn;

use crate::cli::Cli;
use crate::cli::commands::{Summary, mdx_files, relative_to};
use crate::error::Result;
use crate::normalize::fix_keys;

#[derive(Args, Debug)]
pub struct FixKeysArgs {
    /// Root directory to scan for MDX files
    #[arg(default_value = "content/docs")]
    pub root: PathBuf,
}

pub fn run(cli: &Cli, args: &FixKeysArgs) -> Result<()> {
    let mut summary = Summary::default();

    for path in mdx_files(&args.root)? {
        match fix_file(&path) {
            Ok(false) => {}
            Ok(true) => {
                let rel = relative_to(&path, &args.root);
                if !cli.machine && !cli.quiet {
                    println!("  {} {}", "✓".green().bold(), rel);
                }
                summary.files.push(rel);
                summary.changed += 1;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "key fix failed");
                summary.failed += 1;
            }
        }
    }

    if cli.machine {
        println!("{}", serde_json::to_string(&summary)?);
    } else if !cli.quiet {
        println!("\nFixed {} files.", summary.changed);
        if summary.failed > 0 {
            println!("Failed on {} files.", summary.failed);
        }
    }

    Ok(())
}

/// Fix one file in place. Returns whether it changed.
fn fix_file(path: &Path) -> std::io::Result<bool> {
    let content = std::fs::read_to_string(path)?;
    match fix_keys(&content) {
        Some(fixed) => {
            std::fs::write(path, fixed)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
