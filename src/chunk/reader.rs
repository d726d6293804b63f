use std::io::{ErrorKind, Read};

use anyhow::Context as _;

use crate::{
    chunk::label::chunk_label,
    foundation::{
        core::ChunkIndex,
        error::{QrsplitError, QrsplitResult},
    },
};

/// One bounded slice of the input, borrowed from the [`Chunker`]'s buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub index: ChunkIndex,
    pub bytes: &'a [u8],
    pub label: String,
}

impl Chunk<'_> {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Splits a byte stream into chunks of at most `chunk_size` bytes.
///
/// The read buffer is allocated once and overwritten by every read; a chunk
/// only borrows the prefix that was actually filled. Once the reader reports
/// end of stream, or fails, the chunker yields nothing further.
pub struct Chunker<R> {
    reader: R,
    buf: Vec<u8>,
    next_index: ChunkIndex,
    finished: bool,
}

impl<R: Read> Chunker<R> {
    pub fn new(reader: R, chunk_size: usize) -> QrsplitResult<Self> {
        if chunk_size == 0 {
            return Err(QrsplitError::validation("chunk size must be non-zero"));
        }
        Ok(Self {
            reader,
            buf: vec![0u8; chunk_size],
            next_index: ChunkIndex(0),
            finished: false,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.buf.len()
    }

    /// Read the next chunk, or `Ok(None)` at end of stream.
    pub fn next_chunk(&mut self) -> QrsplitResult<Option<Chunk<'_>>> {
        if self.finished {
            return Ok(None);
        }

        let index = self.next_index;
        let n = match fill(&mut self.reader, &mut self.buf) {
            Ok(n) => n,
            Err(err) => {
                self.finished = true;
                return Err(QrsplitError::Other(
                    anyhow::Error::new(err).context(format!("read input chunk {index}")),
                ));
            }
        };

        if n == 0 {
            self.finished = true;
            return Ok(None);
        }
        if n < self.buf.len() {
            self.finished = true;
        }

        self.next_index = index.next();
        Ok(Some(Chunk {
            index,
            bytes: &self.buf[..n],
            label: chunk_label(index, n),
        }))
    }
}

/// Read until `buf` is full or the reader hits end of stream.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Count the chunks a stream of `len` bytes splits into.
pub fn chunk_count(len: u64, chunk_size: usize) -> QrsplitResult<u64> {
    let size = u64::try_from(chunk_size)
        .context("chunk size does not fit in u64")
        .map_err(QrsplitError::Other)?;
    if size == 0 {
        return Err(QrsplitError::validation("chunk size must be non-zero"));
    }
    Ok(len.div_ceil(size))
}

#[cfg(test)]
#[path = "../../tests/unit/chunk/reader.rs"]
mod tests;
