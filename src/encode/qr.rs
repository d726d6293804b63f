//! [`Encoder`] backed by the `qrcodegen` crate.
//!
//! Sizing follows qrcodegen's own buffer rules so that a buffer sized here is
//! always large enough for the bits `make_segment` writes.

use qrcodegen::{QrCode, QrCodeEcc, QrSegment, QrSegmentMode};

use crate::{
    chunk::label::alphanumeric_value,
    encode::{
        encoder::{Encoder, Symbol},
        segment::{Segment, SegmentMode},
    },
    foundation::{
        core::EccPolicy,
        error::{QrsplitError, QrsplitResult},
    },
};

/// Longest segment payload, in bits, qrcodegen accepts.
const MAX_SEGMENT_BITS: usize = i16::MAX as usize;

/// QR Code Model 2 encoder delegating to `qrcodegen`.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrcodegenEncoder;

impl QrcodegenEncoder {
    pub fn new() -> Self {
        Self
    }
}

/// Data bits needed for `len` characters in `mode`.
pub fn segment_bit_len(mode: SegmentMode, len: usize) -> Option<usize> {
    let bits = match mode {
        SegmentMode::Binary => len.checked_mul(8)?,
        SegmentMode::Alphanumeric => (len / 2).checked_mul(11)? + (len % 2) * 6,
    };
    (bits <= MAX_SEGMENT_BITS).then_some(bits)
}

impl Encoder for QrcodegenEncoder {
    fn segment_buffer_size(&self, mode: SegmentMode, len: usize) -> Option<usize> {
        segment_bit_len(mode, len).map(|bits| bits.div_ceil(8))
    }

    fn make_segment(
        &self,
        mode: SegmentMode,
        data: &[u8],
        mut buffer: Vec<u8>,
    ) -> QrsplitResult<Segment> {
        let required = self.segment_buffer_size(mode, data.len()).ok_or_else(|| {
            QrsplitError::capacity(format!(
                "{} characters do not fit in a {mode:?} segment",
                data.len()
            ))
        })?;
        assert!(
            buffer.len() >= required,
            "{mode:?} segment buffer holds {} bytes, {required} required",
            buffer.len()
        );

        buffer.fill(0);
        let mut w = BitWriter::new(&mut buffer);
        match mode {
            SegmentMode::Binary => {
                for &b in data {
                    w.push(u32::from(b), 8);
                }
            }
            SegmentMode::Alphanumeric => {
                let values = data
                    .iter()
                    .map(|&b| {
                        alphanumeric_value(char::from(b)).ok_or_else(|| {
                            QrsplitError::validation(format!(
                                "byte {b:#04x} is not in the alphanumeric charset"
                            ))
                        })
                    })
                    .collect::<QrsplitResult<Vec<u16>>>()?;
                for pair in values.chunks(2) {
                    if let [a, b] = *pair {
                        w.push(u32::from(a * 45 + b), 11);
                    } else {
                        w.push(u32::from(pair[0]), 6);
                    }
                }
            }
        }
        let bit_len = w.len();

        Segment::new(mode, data.len(), bit_len, buffer)
    }

    fn encode_segments(&self, segments: &[Segment], ecc: EccPolicy) -> QrsplitResult<Symbol> {
        let segs: Vec<QrSegment> = segments
            .iter()
            .map(|s| QrSegment::new(qr_mode(s.mode()), s.num_chars(), s.bits().collect()))
            .collect();

        let code = QrCode::encode_segments(&segs, qr_ecc(ecc))
            .map_err(|e| QrsplitError::capacity(e.to_string()))?;
        symbol_from_qr(&code)
    }
}

fn qr_mode(mode: SegmentMode) -> QrSegmentMode {
    match mode {
        SegmentMode::Binary => QrSegmentMode::Byte,
        SegmentMode::Alphanumeric => QrSegmentMode::Alphanumeric,
    }
}

fn qr_ecc(ecc: EccPolicy) -> QrCodeEcc {
    match ecc {
        EccPolicy::Low => QrCodeEcc::Low,
    }
}

fn symbol_from_qr(code: &QrCode) -> QrsplitResult<Symbol> {
    let side = u32::try_from(code.size())
        .map_err(|_| QrsplitError::encode(format!("negative symbol size {}", code.size())))?;
    // side <= 177, so module coordinates always fit in i32.
    Symbol::from_fn(side, |x, y| code.get_module(x as i32, y as i32))
}

/// Appends bits MSB-first into a zeroed byte buffer.
struct BitWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> BitWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    fn push(&mut self, value: u32, count: u8) {
        for i in (0..count).rev() {
            if (value >> i) & 1 == 1 {
                self.buf[self.len / 8] |= 0x80 >> (self.len % 8);
            }
            self.len += 1;
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/qr.rs"]
mod tests;
