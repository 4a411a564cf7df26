//! md2pdf CLI - convert markdown files to styled PDFs.
//!
//! Styles:
//! - `resume`: LaTeX résumé template, compiled with tectonic
//! - `doc`: clean document style for guides and write-ups, via weasyprint
//! - `notes`: relaxed study notes with larger type, via weasyprint

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::ConvertArgs;
use output::Output;

/// Convert markdown to styled PDF.
#[derive(Parser)]
#[command(name = "md2pdf", version, about)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.convert.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.convert.execute(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
