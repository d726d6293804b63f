//! qrsplit turns an arbitrary file into a series of QR code bitmaps.
//!
//! The input is read in chunks of at most [`MAX_CHUNK`] bytes. Each chunk is
//! packed into one symbol as two segments, the raw bytes followed by an
//! alphanumeric label `SEG<index>-<length>`, then printed to the terminal and
//! written as `<label>.bmp`.
//!
//! # Pipeline overview
//!
//! 1. **Chunk**: `Read -> Chunk` ([`Chunker`])
//! 2. **Segment**: `Chunk -> [Segment; 2]` ([`build_segments`])
//! 3. **Encode**: `[Segment] -> Symbol` (any [`Encoder`], by default [`QrcodegenEncoder`])
//! 4. **Render**: `Symbol -> stdout` ([`render_console`]) and `Symbol -> .bmp` ([`write_bmp`])
//!
//! Chunks that do not fit in a symbol, or whose image cannot be written, are
//! skipped and reported in the [`RunSummary`]; the run carries on.
#![forbid(unsafe_code)]

mod chunk;
mod encode;
mod foundation;
mod pipeline;
mod render;

pub use chunk::label::{ALPHANUMERIC_CHARSET, chunk_label, is_alphanumeric_label};
pub use chunk::reader::{Chunk, Chunker, chunk_count};
pub use encode::encoder::{Encoder, Symbol};
pub use encode::qr::{QrcodegenEncoder, segment_bit_len};
pub use encode::segment::{Segment, SegmentMode, build_segments};
pub use foundation::config::PipelineConfig;
pub use foundation::core::{BORDER, ChunkIndex, ECC_POLICY, EccPolicy, MAX_CHUNK, SCALE};
pub use foundation::error::{QrsplitError, QrsplitResult};
pub use pipeline::{ChunkOutcome, RenderedChunk, RunSummary, encode_chunk, open_input, run};
pub use render::bmp::{BMP_HEADER_LEN, RasterGeometry, encode_bmp, write_bmp, write_bmp_to};
pub use render::console::render_console;
