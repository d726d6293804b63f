//! Turning a chunk into a QR symbol.
//!
//! The pipeline talks to symbol construction only through [`encoder::Encoder`];
//! [`qr::QrcodegenEncoder`] is the implementation used by the binary.

/// `Encoder` trait and the `Symbol` it produces.
pub mod encoder;
/// `qrcodegen`-backed encoder.
pub mod qr;
/// Segment types and the two-segment layout of a chunk.
pub mod segment;
