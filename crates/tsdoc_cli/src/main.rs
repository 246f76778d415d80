//! tsdoc: generate MDX documentation pages from a TypeScript source tree.
//!
//! Configuration is read from `tsdoc.toml` in the project root when
//! present; flags override it.
//!
//! Environment variables:
//! - `TSDOC_LOG` - Log filter (default: "info", "debug" with `-v`)

mod docs;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tsdoc",
    version,
    about = "Generate MDX documentation pages from TypeScript sources"
)]
pub(crate) struct Cli {
    /// Project root
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to <root>/tsdoc.toml when it exists)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Entry glob selecting the documented files, relative to the root
    #[arg(short = 'e', long)]
    entry: Option<String>,

    /// Output directory
    #[arg(short = 'o', long = "docs")]
    docs: Option<PathBuf>,

    /// Remove the output directory before writing
    #[arg(long)]
    clean: bool,

    /// Document private declarations
    #[arg(long)]
    private: bool,

    /// Document @internal declarations
    #[arg(long)]
    internal: bool,

    /// Prefix of generated documentation links
    #[arg(long)]
    link_prefix: Option<String>,

    /// Path rewrite applied to page titles and slugs, as find=replace.
    /// Can be given multiple times; applied in order after those of the
    /// configuration file.
    #[arg(long = "alias", value_name = "FIND=REPLACE")]
    aliases: Vec<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match docs::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tsdoc: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries the run summary
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("TSDOC_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
