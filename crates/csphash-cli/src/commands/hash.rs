use crate::Cli;
use anyhow::{Context, Result};
use csphash_render::ReportWriter;
use std::io::Write;
use std::path::Path;

pub fn run(cli: &Cli, path: &Path) -> Result<()> {
    let computer = cli.computer()?;
    let file = computer
        .hash_file(path)
        .with_context(|| format!("failed to hash {}", path.display()))?;

    tracing::info!(path = %file.path, size = file.size, "computed SHA-256");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ReportWriter::new(cli.output_format()).write_to(&mut out, &file)?;
    out.flush()?;

    Ok(())
}
