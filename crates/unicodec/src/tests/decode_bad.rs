//! Every failure class in the error taxonomy, exercised through the public
//! entry points that first encounter it.

use alloc::{vec, vec::Vec};

use crate::{
    Encoding, Error, Utf8Error, Utf16Error, utf8_bytes_to_utf16, utf8_to_utf16,
    utf16_bytes_to_utf16, utf16_to_utf8, utf16be_bytes_to_utf16, utf32_bytes_to_utf32,
    utf32_to_utf8, validate_utf8,
};

#[test]
fn overlong_two_byte_run() {
    assert_eq!(
        utf8_to_utf16(&[0xC0, 0x80]),
        Err(Error::MalformedUtf8(Utf8Error::OverlongEncoding { offset: 0 }))
    );
}

#[test]
fn overlong_longer_runs() {
    // 0xE0 with a second byte in 0x80–0x9F encodes a value below 0x800.
    assert_eq!(
        validate_utf8(&[0xE0, 0x80, 0x80]),
        Err(Error::MalformedUtf8(Utf8Error::OverlongEncoding { offset: 0 }))
    );
    // 0xF0 with a second byte in 0x80–0x8F encodes a value below 0x10000.
    assert_eq!(
        validate_utf8(&[0xF0, 0x80, 0x80, 0x80]),
        Err(Error::MalformedUtf8(Utf8Error::OverlongEncoding { offset: 0 }))
    );
}

#[test]
fn continuation_byte_missing_at_end_of_input() {
    assert_eq!(
        utf8_to_utf16(&[0x41, 0xC3]),
        Err(Error::MalformedUtf8(Utf8Error::MissingContinuation { offset: 2 }))
    );
}

#[test]
fn lone_surrogates() {
    assert_eq!(
        utf16_to_utf8(&[0xD800]),
        Err(Error::MalformedUtf16(Utf16Error::LoneHighSurrogate { unit: 0xD800, offset: 0 }))
    );
    assert_eq!(
        utf16_to_utf8(&[0xDC00]),
        Err(Error::MalformedUtf16(Utf16Error::LoneLowSurrogate { unit: 0xDC00, offset: 0 }))
    );
}

#[test]
fn scalar_above_maximum() {
    assert_eq!(
        utf32_to_utf8(&[0x11_0000]),
        Err(Error::CodePointOutOfRange { value: 0x11_0000, offset: 0 })
    );
}

#[test]
fn short_utf32_buffer() {
    assert_eq!(
        utf32_bytes_to_utf32(&[0x00, 0x00, 0x00]),
        Err(Error::InvalidBufferLength { len: 3, width: 4 })
    );
}

#[test]
fn odd_utf16_buffer() {
    assert_eq!(
        utf16be_bytes_to_utf16(&[0x00]),
        Err(Error::InvalidBufferLength { len: 1, width: 2 })
    );
}

#[test]
fn bom_family_mismatches() {
    // UTF-16LE BOM handed to the UTF-8-oriented entry point.
    assert_eq!(
        utf8_bytes_to_utf16(&[0xFF, 0xFE, 0x41, 0x00]),
        Err(Error::EncodingMismatch { expected: Encoding::Utf8, found: Encoding::Utf16Le })
    );
    // UTF-8 BOM handed to the UTF-16-oriented entry point.
    assert_eq!(
        utf16_bytes_to_utf16(&[0xEF, 0xBB, 0xBF]),
        Err(Error::EncodingMismatch { expected: Encoding::Utf16Be, found: Encoding::Utf8 })
    );
}

#[test]
fn byte_decode_rejects_lone_surrogate_units() {
    // 0xD800 as big-endian bytes with nothing after it.
    assert_eq!(
        utf16be_bytes_to_utf16(&[0xD8, 0x00]),
        Err(Error::MalformedUtf16(Utf16Error::LoneHighSurrogate { unit: 0xD800, offset: 0 }))
    );
}

#[test]
fn failure_produces_no_partial_output() {
    // The valid prefix before the bad unit must not leak out.
    let input: Vec<u16> = vec![0x41, 0x42, 0xDC00];
    assert!(utf16_to_utf8(&input).is_err());
}
