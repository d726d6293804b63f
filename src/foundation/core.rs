/// Largest chunk, in bytes, read from the input per symbol.
///
/// A full chunk plus its label fits a single symbol at Low error correction.
pub const MAX_CHUNK: usize = 2300;

/// Quiet-zone width around a symbol, in modules.
pub const BORDER: i32 = 4;

/// Pixels per module side in raster output.
pub const SCALE: u32 = 2;

/// Error-correction level requested from the encoder.
///
/// The encoder may still raise the level when the data leaves room for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EccPolicy {
    #[default]
    Low,
}

/// The level every symbol is encoded with.
pub const ECC_POLICY: EccPolicy = EccPolicy::Low;

/// Zero-based position of a chunk in the input stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkIndex(pub u64);

impl ChunkIndex {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ChunkIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
