use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    chunk::reader::{Chunk, Chunker},
    encode::{encoder::Encoder, encoder::Symbol, segment::build_segments},
    foundation::{
        config::PipelineConfig,
        core::{ChunkIndex, ECC_POLICY},
        error::{QrsplitError, QrsplitResult},
    },
    render::{bmp::write_bmp, console::render_console},
};

/// A chunk whose symbol reached both the console and its image file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedChunk {
    pub index: ChunkIndex,
    pub label: String,
    pub len: usize,
    pub side: u32,
    pub path: PathBuf,
}

/// Result of processing one chunk.
#[derive(Debug)]
pub enum ChunkOutcome {
    Rendered(RenderedChunk),
    /// No image was written for this chunk; the run moved on.
    Skipped {
        index: ChunkIndex,
        label: String,
        reason: QrsplitError,
    },
}

impl ChunkOutcome {
    pub fn label(&self) -> &str {
        match self {
            Self::Rendered(r) => &r.label,
            Self::Skipped { label, .. } => label,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Per-chunk outcomes of a whole run, in input order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<ChunkOutcome>,
}

impl RunSummary {
    pub fn chunks(&self) -> usize {
        self.outcomes.len()
    }

    pub fn rendered(&self) -> impl Iterator<Item = &RenderedChunk> {
        self.outcomes.iter().filter_map(|o| match o {
            ChunkOutcome::Rendered(r) => Some(r),
            ChunkOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_rendered()).count()
    }
}

/// Open the input file for a run.
pub fn open_input(path: &Path) -> QrsplitResult<File> {
    Ok(File::open(path).with_context(|| format!("open input '{}'", path.display()))?)
}

/// Chunk `input`, encode every chunk, print it to `console` and write its image.
///
/// Capacity and image-write failures skip the chunk and are recorded in the
/// summary. Read failures and console write failures end the run.
pub fn run<R, W, E>(
    input: R,
    console: &mut W,
    encoder: &E,
    cfg: &PipelineConfig,
) -> QrsplitResult<RunSummary>
where
    R: Read,
    W: Write + ?Sized,
    E: Encoder + ?Sized,
{
    cfg.validate()?;
    let mut chunker = Chunker::new(input, cfg.chunk_size)?;
    let mut summary = RunSummary::default();

    while let Some(chunk) = chunker.next_chunk()? {
        tracing::info!(index = chunk.index.0, bytes = chunk.len(), "read chunk");
        let outcome = process_chunk(&chunk, console, encoder, cfg)?;
        match &outcome {
            ChunkOutcome::Rendered(r) => {
                tracing::info!(path = %r.path.display(), side = r.side, "wrote image");
            }
            ChunkOutcome::Skipped { label, reason, .. } => {
                tracing::warn!(%label, error = %reason, "skipped chunk");
            }
        }
        summary.outcomes.push(outcome);
    }

    tracing::debug!(
        chunks = summary.chunks(),
        skipped = summary.skipped(),
        "input exhausted"
    );
    Ok(summary)
}

/// Build the segments for `chunk` and hand them to the encoder.
///
/// The segment buffers are dropped before this returns, whatever the outcome.
pub fn encode_chunk<E: Encoder + ?Sized>(encoder: &E, chunk: &Chunk<'_>) -> QrsplitResult<Symbol> {
    let segments = build_segments(encoder, chunk.bytes, &chunk.label)?;
    encoder.encode_segments(&segments, ECC_POLICY)
}

#[tracing::instrument(skip_all, fields(index = chunk.index.0, label = %chunk.label))]
fn process_chunk<W, E>(
    chunk: &Chunk<'_>,
    console: &mut W,
    encoder: &E,
    cfg: &PipelineConfig,
) -> QrsplitResult<ChunkOutcome>
where
    W: Write + ?Sized,
    E: Encoder + ?Sized,
{
    let skipped = |reason: QrsplitError| ChunkOutcome::Skipped {
        index: chunk.index,
        label: chunk.label.clone(),
        reason,
    };

    let symbol = match encode_chunk(encoder, chunk) {
        Ok(symbol) => symbol,
        Err(reason) => return Ok(skipped(reason)),
    };

    render_console(console, &symbol).context("write symbol to console")?;

    let path = cfg.image_path(&chunk.label);
    if let Err(reason) = write_bmp(&path, &symbol) {
        return Ok(skipped(reason));
    }

    Ok(ChunkOutcome::Rendered(RenderedChunk {
        index: chunk.index,
        label: chunk.label.clone(),
        len: chunk.len(),
        side: symbol.side(),
        path,
    }))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
