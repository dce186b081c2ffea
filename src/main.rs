use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use songly_cli::cli::Cli;
use songly_cli::{Session, SessionEnd, SessionOptions, SongCatalog};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout belongs to the session, diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let options = SessionOptions::from(&cli);
    let stdout = io::stdout();
    let mut session = Session::new(SongCatalog::new(), stdout.lock(), options);

    let end = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(file))
        }
        None => session.run(io::stdin().lock()),
    }
    .context("Session aborted")?;

    match end {
        SessionEnd::Quit => info!("exited on quit"),
        SessionEnd::EndOfInput => info!("exited at end of input"),
    }
    Ok(())
}
