use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "qrsplit",
    version,
    about = "Split a file into chunks and write each chunk as a QR code bitmap"
)]
struct Cli {
    /// File to split. Images are written to the current directory.
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match cmd_split(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();
}

fn cmd_split(cli: &Cli) -> anyhow::Result<()> {
    let input = qrsplit::open_input(&cli.file)?;
    let cfg = qrsplit::PipelineConfig::default();

    match input.metadata() {
        Ok(meta) => {
            let chunks = qrsplit::chunk_count(meta.len(), cfg.chunk_size)?;
            tracing::info!(
                path = %cli.file.display(),
                bytes = meta.len(),
                chunks,
                "splitting input"
            );
        }
        Err(err) => {
            tracing::debug!(path = %cli.file.display(), error = %err, "input size unknown");
        }
    }

    let encoder = qrsplit::QrcodegenEncoder::new();
    let mut console = BufWriter::new(std::io::stdout().lock());
    let summary = qrsplit::run(input, &mut console, &encoder, &cfg)?;
    console.flush().context("flush stdout")?;

    eprintln!(
        "wrote {} of {} chunk images",
        summary.rendered().count(),
        summary.chunks()
    );
    Ok(())
}
