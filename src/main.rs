//! doctable - MDX documentation table converter
//!
//! Rewrites markdown tables in MDX files into fumadocs TypeTable components.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use doctable::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match doctable::cli::commands::run(&cli, &cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.machine {
                // Machine mode: JSON error output to stdout
                let error_json = serde_json::json!({
                    "error": true,
                    "message": e.to_string(),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,doctable=info",
        1 => "info,doctable=debug",
        2 => "debug,doctable=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
