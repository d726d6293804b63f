use std::path::PathBuf;

use crate::foundation::{
    core::MAX_CHUNK,
    error::{QrsplitError, QrsplitResult},
};

/// Knobs for one pipeline run.
///
/// The command-line tool always runs with [`PipelineConfig::default`]; the
/// setters exist for embedding and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Maximum bytes per chunk.
    pub chunk_size: usize,
    /// Directory that receives `<label>.bmp` files.
    pub out_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: MAX_CHUNK,
            out_dir: PathBuf::from("."),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> QrsplitResult<()> {
        if self.chunk_size == 0 {
            return Err(QrsplitError::validation("chunk size must be non-zero"));
        }
        Ok(())
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Output path for the image of a chunk with the given label.
    pub fn image_path(&self, label: &str) -> PathBuf {
        self.out_dir.join(format!("{label}.bmp"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
