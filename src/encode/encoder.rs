use crate::{
    encode::segment::{Segment, SegmentMode},
    foundation::{
        core::EccPolicy,
        error::{QrsplitError, QrsplitResult},
    },
};

/// A finished square symbol: `side * side` modules, row-major, `true` = dark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    side: u32,
    modules: Vec<bool>,
}

impl Symbol {
    /// Side length of a version 40 QR symbol.
    pub const MAX_SIDE: u32 = 177;

    pub fn new(side: u32, modules: Vec<bool>) -> QrsplitResult<Self> {
        if side == 0 || side > Self::MAX_SIDE || side.is_multiple_of(2) {
            return Err(QrsplitError::validation(format!(
                "symbol side must be odd and in 1..={}, got {side}",
                Self::MAX_SIDE
            )));
        }
        let expected = (side as usize) * (side as usize);
        if modules.len() != expected {
            return Err(QrsplitError::validation(format!(
                "symbol of side {side} needs {expected} modules, got {}",
                modules.len()
            )));
        }
        Ok(Self { side, modules })
    }

    /// Build a symbol by sampling `dark(x, y)` for every module.
    pub fn from_fn(side: u32, mut dark: impl FnMut(u32, u32) -> bool) -> QrsplitResult<Self> {
        let mut modules = Vec::with_capacity((side as usize) * (side as usize));
        for y in 0..side {
            for x in 0..side {
                modules.push(dark(x, y));
            }
        }
        Self::new(side, modules)
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Module colour at `(x, y)`; anything outside the grid is light.
    pub fn is_dark(&self, x: i32, y: i32) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        if x >= self.side || y >= self.side {
            return false;
        }
        self.modules[(y as usize) * (self.side as usize) + (x as usize)]
    }

    #[cfg(test)]
    pub(crate) fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }
}

/// Symbol construction, consumed as an opaque capability.
///
/// Implementations own the buffer-sizing rules, the bit layout of each
/// segment, and the error-correction math. The pipeline only sizes buffers,
/// asks for segments, and submits them in order.
pub trait Encoder {
    /// Bytes of scratch storage needed for `len` characters in `mode`, or
    /// `None` when that many characters can never fit in a symbol.
    fn segment_buffer_size(&self, mode: SegmentMode, len: usize) -> Option<usize>;

    /// Encode `data` into `buffer` and wrap it as a segment.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than
    /// [`segment_buffer_size`](Encoder::segment_buffer_size) for `(mode, data.len())`.
    fn make_segment(
        &self,
        mode: SegmentMode,
        data: &[u8],
        buffer: Vec<u8>,
    ) -> QrsplitResult<Segment>;

    /// Pack `segments`, in order, into the smallest symbol that fits.
    fn encode_segments(&self, segments: &[Segment], ecc: EccPolicy) -> QrsplitResult<Symbol>;
}

#[cfg(test)]
#[path = "../../tests/unit/encode/encoder.rs"]
mod tests;
