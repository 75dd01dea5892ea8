mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use csphash_digest::{DEFAULT_CHUNK_SIZE, DigestComputer};
use csphash_render::OutputFormat;
use std::path::PathBuf;

/// csphash — SHA-256 file digests and Content-Security-Policy hash sources.
#[derive(Parser, Debug)]
#[command(name = "csphash", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Read chunk size in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of a file
    Hash {
        /// File to hash
        path: PathBuf,
    },
    /// Print the digest and a CSP header allowing the file as an inline script
    Csp {
        /// File to hash
        path: PathBuf,

        /// Emit an HTML <meta http-equiv> tag instead of the header value
        #[arg(long)]
        meta: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        match self.format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }

    pub fn computer(&self) -> Result<DigestComputer> {
        Ok(DigestComputer::new().chunk_size(self.chunk_size)?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Hash { path } => commands::hash::run(&cli, path),
        Commands::Csp { path, meta } => commands::csp::run(&cli, path, *meta),
    }
}
