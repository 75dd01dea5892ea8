use crate::Cli;
use anyhow::{Context, Result};
use csphash_render::{CspStyle, ReportWriter};
use std::io::Write;
use std::path::Path;

pub fn run(cli: &Cli, path: &Path, meta: bool) -> Result<()> {
    let computer = cli.computer()?;
    let file = computer
        .hash_file(path)
        .with_context(|| format!("failed to hash {}", path.display()))?;

    tracing::info!(path = %file.path, digest = %file.digest, "generating CSP");

    let style = if meta { CspStyle::Meta } else { CspStyle::Header };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ReportWriter::new(cli.output_format())
        .csp(Some(style))
        .write_to(&mut out, &file)?;
    out.flush()?;

    Ok(())
}
