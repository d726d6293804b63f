use crate::foundation::core::ChunkIndex;

/// Characters accepted by the QR alphanumeric mode, in code-value order.
pub const ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Label carried alongside a chunk's bytes: `SEG<index>-<byte count>`.
pub fn chunk_label(index: ChunkIndex, len: usize) -> String {
    format!("SEG{index}-{len}")
}

/// Whether every character of `text` is encodable in alphanumeric mode.
pub fn is_alphanumeric_label(text: &str) -> bool {
    text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
}

/// Code value of `c` in the alphanumeric charset.
pub fn alphanumeric_value(c: char) -> Option<u16> {
    ALPHANUMERIC_CHARSET
        .find(c)
        .and_then(|idx| u16::try_from(idx).ok())
}

#[cfg(test)]
#[path = "../../tests/unit/chunk/label.rs"]
mod tests;
