//! Input chunking.

/// Chunk labels and the alphanumeric alphabet they are checked against.
pub mod label;
/// Bounded reads into a reused buffer.
pub mod reader;
