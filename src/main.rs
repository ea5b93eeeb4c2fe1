//! CLI entry point for filelist

use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use filelist::{ListingConfig, OutputFormat, print_listing, run};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "filelist")]
#[command(about = "List the contents of a directory as text, JSON or YAML")]
#[command(version)]
struct Args {
    /// Path to the directory to list
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    path: Option<PathBuf>,

    /// List files recursively (symlinks are never followed)
    #[arg(short, long)]
    recursive: bool,

    /// Output format: text, json or yaml
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    output: String,
}

/// Print a single-line fatal error and exit.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("filelist: {}", message);
    process::exit(1);
}

fn main() {
    // Diagnostics go to stderr so they never mix with the listing (respects RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let mut config = ListingConfig::new(args.path.unwrap_or_default());
    config.recursive = args.recursive;
    // An empty path is reported before anything else is looked at.
    config.validate().unwrap_or_else(|e| fail(e));
    config.format = args
        .output
        .parse::<OutputFormat>()
        .unwrap_or_else(|e| fail(e));
    tracing::debug!(?config, "resolved configuration");

    let rendered = run(&config).unwrap_or_else(|e| fail(e));

    if let Err(e) = print_listing(&rendered) {
        fail(format!("error writing output: {}", e));
    }
}
