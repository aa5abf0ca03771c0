//! doctable convert - rewrite markdown tables as TypeTable fragments

use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use tracing::warn;

use crate::cli::Cli;
use crate::cli::commands::{Summary, in_blog, mdx_files, relative_to};
use crate::error::Result;
use crate::rewrite::convert_document;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Root directory to scan for MDX files
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Report files that would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(cli: &Cli, args: &ConvertArgs) -> Result<()> {
    let mut summary = Summary::default();

    for path in mdx_files(&args.root)? {
        if in_blog(&path) {
            continue;
        }
        match convert_file(&path, args.dry_run) {
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
                warn!(path = %path.display(), error = %e, "conversion failed");
                summary.failed += 1;
            }
        }
    }

    if cli.machine {
        println!("{}", serde_json::to_string(&summary)?);
    } else if !cli.quiet {
        println!("\nConverted {} files.", summary.changed);
        if summary.failed > 0 {
            println!("Failed on {} files.", summary.failed);
        }
    }

    Ok(())
}

/// Convert one file in place. Returns whether it changed.
fn convert_file(path: &Path, dry_run: bool) -> std::io::Result<bool> {
    let content = std::fs::read_to_string(path)?;
    match convert_document(&content) {
        Some(rewritten) => {
            if !dry_run {
                std::fs::write(path, rewritten)?;
            }
            Ok(true)
        }
        None => Ok(false),
    }
}
