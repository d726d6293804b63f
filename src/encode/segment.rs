use crate::{
    chunk::label::is_alphanumeric_label,
    encode::encoder::Encoder,
    foundation::error::{QrsplitError, QrsplitResult},
};

/// Data mode of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentMode {
    /// Arbitrary bytes, 8 bits each, copied verbatim.
    Binary,
    /// Uppercase letters, digits and ` $%*+-./:`, 11 bits per pair.
    Alphanumeric,
}

/// One mode-tagged unit of data, packed MSB-first into an owned buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    mode: SegmentMode,
    num_chars: usize,
    bit_len: usize,
    buffer: Vec<u8>,
}

impl Segment {
    pub fn new(
        mode: SegmentMode,
        num_chars: usize,
        bit_len: usize,
        buffer: Vec<u8>,
    ) -> QrsplitResult<Self> {
        if bit_len > buffer.len().saturating_mul(8) {
            return Err(QrsplitError::validation(format!(
                "segment claims {bit_len} bits but its buffer holds {} bytes",
                buffer.len()
            )));
        }
        Ok(Self {
            mode,
            num_chars,
            bit_len,
            buffer,
        })
    }

    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    /// Characters (bytes for [`SegmentMode::Binary`]) carried by the segment.
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    #[cfg(test)]
    pub(crate) fn bit_len(&self) -> usize {
        self.bit_len
    }

    #[cfg(test)]
    pub(crate) fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The segment's data bits, most significant first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_len).map(|i| (self.buffer[i / 8] >> (7 - i % 8)) & 1 == 1)
    }
}

/// Build the two segments for one chunk: the payload bytes, then the label.
///
/// The order is part of the output format: readers expect the binary segment
/// first and the label last.
pub fn build_segments<E: Encoder + ?Sized>(
    encoder: &E,
    bytes: &[u8],
    label: &str,
) -> QrsplitResult<[Segment; 2]> {
    if !is_alphanumeric_label(label) {
        return Err(QrsplitError::validation(format!(
            "label '{label}' is not encodable in alphanumeric mode"
        )));
    }
    let payload = build_one(encoder, SegmentMode::Binary, bytes)?;
    let tag = build_one(encoder, SegmentMode::Alphanumeric, label.as_bytes())?;
    Ok([payload, tag])
}

fn build_one<E: Encoder + ?Sized>(
    encoder: &E,
    mode: SegmentMode,
    data: &[u8],
) -> QrsplitResult<Segment> {
    let size = encoder
        .segment_buffer_size(mode, data.len())
        .filter(|&size| size > 0 || data.is_empty())
        .ok_or_else(|| {
            QrsplitError::capacity(format!(
                "{} characters do not fit in a {mode:?} segment",
                data.len()
            ))
        })?;
    encoder.make_segment(mode, data, vec![0u8; size])
}

#[cfg(test)]
#[path = "../../tests/unit/encode/segment.rs"]
mod tests;
