use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Compresses every `<name>.out` fixture into a `<name>.zlib` artifact unless
/// the artifact already exists.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Directory holding the fixtures.
    #[arg(default_value_os_t = default_dir())]
    dir: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/zlib")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zlibfix=warn")),
        )
        .with_writer(io::stderr)
        .init();

    zlibfix::run(&cli.dir, &mut io::stdout().lock())
        .with_context(|| format!("failed to generate artifacts in {}", cli.dir.display()))?;

    Ok(())
}
