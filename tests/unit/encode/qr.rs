use super::*;
use crate::{
    chunk::label::ALPHANUMERIC_CHARSET,
    encode::segment::build_segments,
};

/// Read `count` bits starting at `pos` as an unsigned integer.
fn read_bits(bits: &[bool], pos: usize, count: usize) -> u32 {
    bits[pos..pos + count]
        .iter()
        .fold(0u32, |acc, &b| (acc << 1) | u32::from(b))
}

/// Unpack an alphanumeric segment back to text.
fn decode_alphanumeric(seg: &Segment) -> String {
    let bits: Vec<bool> = seg.bits().collect();
    let charset: Vec<char> = ALPHANUMERIC_CHARSET.chars().collect();
    let mut out = String::new();
    let mut pos = 0;
    let mut remaining = seg.num_chars();
    while remaining >= 2 {
        let v = read_bits(&bits, pos, 11) as usize;
        out.push(charset[v / 45]);
        out.push(charset[v % 45]);
        pos += 11;
        remaining -= 2;
    }
    if remaining == 1 {
        out.push(charset[read_bits(&bits, pos, 6) as usize]);
    }
    out
}

#[test]
fn sizing_matches_qrcodegen_rules() {
    let enc = QrcodegenEncoder::new();
    assert_eq!(enc.segment_buffer_size(SegmentMode::Binary, 0), Some(0));
    assert_eq!(enc.segment_buffer_size(SegmentMode::Binary, 10), Some(10));
    assert_eq!(enc.segment_buffer_size(SegmentMode::Binary, 2300), Some(2300));
    // 7 chars: 3 pairs * 11 + 6 = 39 bits.
    assert_eq!(segment_bit_len(SegmentMode::Alphanumeric, 7), Some(39));
    assert_eq!(enc.segment_buffer_size(SegmentMode::Alphanumeric, 7), Some(5));
    assert_eq!(enc.segment_buffer_size(SegmentMode::Binary, 4095), Some(4095));
    assert_eq!(enc.segment_buffer_size(SegmentMode::Binary, 4096), None);
}

#[test]
fn binary_segment_round_trips_chunk_bytes() {
    let enc = QrcodegenEncoder::new();
    let bytes: Vec<u8> = (0..=255u8).collect();
    let seg = enc
        .make_segment(SegmentMode::Binary, &bytes, vec![0u8; 256])
        .unwrap();
    assert_eq!(seg.bit_len(), 256 * 8);
    assert_eq!(seg.buffer(), bytes.as_slice());
}

#[test]
fn alphanumeric_segment_round_trips_label() {
    let enc = QrcodegenEncoder::new();
    for label in ["SEG0-10", "SEG12-2300", "A", "AB", "A B$%*+-./:"] {
        let size = enc
            .segment_buffer_size(SegmentMode::Alphanumeric, label.len())
            .unwrap();
        let seg = enc
            .make_segment(SegmentMode::Alphanumeric, label.as_bytes(), vec![0xFF; size])
            .unwrap();
        assert_eq!(decode_alphanumeric(&seg), label);
    }
}

#[test]
#[should_panic(expected = "segment buffer holds")]
fn undersized_buffer_is_a_precondition_violation() {
    let enc = QrcodegenEncoder::new();
    let _ = enc.make_segment(SegmentMode::Binary, b"abcd", vec![0u8; 3]);
}

#[test]
fn alphanumeric_rejects_lowercase() {
    let enc = QrcodegenEncoder::new();
    let err = enc
        .make_segment(SegmentMode::Alphanumeric, b"ab", vec![0u8; 2])
        .unwrap_err();
    assert!(matches!(err, QrsplitError::Validation(_)));
}

#[test]
fn small_payload_fits_version_one() {
    let enc = QrcodegenEncoder::new();
    let segs = build_segments(&enc, b"HELLO WRLD", "SEG0-10").unwrap();
    let sym = enc.encode_segments(&segs, EccPolicy::Low).unwrap();
    // 4+8+80 payload bits and 4+9+39 label bits fit the 152 data bits of 1-L.
    assert_eq!(sym.side(), 21);
    // Finder pattern corners are dark.
    assert!(sym.is_dark(0, 0));
    assert!(sym.is_dark(20, 0));
    assert!(sym.is_dark(0, 20));
}

#[test]
fn full_chunk_still_fits() {
    let enc = QrcodegenEncoder::new();
    let bytes = vec![0xC3u8; 2300];
    let segs = build_segments(&enc, &bytes, "SEG0-2300").unwrap();
    let sym = enc.encode_segments(&segs, EccPolicy::Low).unwrap();
    assert_eq!((sym.side() - 17) % 4, 0);
    assert!(sym.side() > 140);
}

#[test]
fn over_capacity_maps_to_capacity_error() {
    let enc = QrcodegenEncoder::new();
    let bytes = vec![0u8; 3000];
    let segs = build_segments(&enc, &bytes, "SEG0-3000").unwrap();
    let err = enc.encode_segments(&segs, EccPolicy::Low).unwrap_err();
    assert!(err.is_capacity());
}

#[test]
fn encoding_is_deterministic() {
    let enc = QrcodegenEncoder::new();
    let segs = build_segments(&enc, b"same input", "SEG0-10").unwrap();
    let a = enc.encode_segments(&segs, EccPolicy::Low).unwrap();
    let b = enc.encode_segments(&segs, EccPolicy::Low).unwrap();
    assert_eq!(a, b);
}
