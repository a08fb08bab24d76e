//! Lossless conversion among the UTF-8, UTF-16, and UTF-32 transcoding forms.
//!
//! Every conversion routes through the scalar decoders in [`crate::validate`],
//! so malformed input fails with the same diagnostic as an explicit
//! validation call, at the first offending element, with no partial output.
#![allow(clippy::cast_possible_truncation)]

use alloc::vec::Vec;

use crate::error::Error;
use crate::validate::{MAX_SCALAR, next_scalar_utf8, next_scalar_utf16, validate_utf32};

/// Appends the UTF-8 encoding of `value` to `out`.
///
/// `value` must already be at or below [`MAX_SCALAR`].
pub(crate) fn push_utf8(value: u32, out: &mut Vec<u8>) {
    if value < 0x80 {
        out.push(value as u8);
    } else if value < 0x800 {
        out.push(0xC0 | (value >> 6) as u8);
        out.push(0x80 | (value & 0x3F) as u8);
    } else if value < 0x10000 {
        out.push(0xE0 | (value >> 12) as u8);
        out.push(0x80 | ((value >> 6) & 0x3F) as u8);
        out.push(0x80 | (value & 0x3F) as u8);
    } else {
        out.push(0xF0 | (value >> 18) as u8);
        out.push(0x80 | ((value >> 12) & 0x3F) as u8);
        out.push(0x80 | ((value >> 6) & 0x3F) as u8);
        out.push(0x80 | (value & 0x3F) as u8);
    }
}

/// Appends the UTF-16 encoding of `value` to `out`, expanding values at or
/// above 0x10000 into a surrogate pair.
pub(crate) fn push_utf16(value: u32, out: &mut Vec<u16>) {
    if value < 0x10000 {
        out.push(value as u16);
    } else {
        let v = value - 0x10000;
        out.push(0xD800 | (v >> 10) as u16);
        out.push(0xDC00 | (v & 0x3FF) as u16);
    }
}

/// Converts a UTF-8 byte sequence to UTF-16 code units.
///
/// # Errors
///
/// Fails if `bytes` is not well-formed UTF-8 (see [`crate::validate_utf8`]).
pub fn utf8_to_utf16(bytes: &[u8]) -> Result<Vec<u16>, Error> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut offset = 0;
    while offset < bytes.len() {
        let (value, len) = next_scalar_utf8(bytes, offset)?;
        push_utf16(value, &mut out);
        offset += len;
    }
    Ok(out)
}

/// Converts a UTF-8 byte sequence to UTF-32 code units.
///
/// # Errors
///
/// Fails if `bytes` is not well-formed UTF-8.
pub fn utf8_to_utf32(bytes: &[u8]) -> Result<Vec<u32>, Error> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut offset = 0;
    while offset < bytes.len() {
        let (value, len) = next_scalar_utf8(bytes, offset)?;
        out.push(value);
        offset += len;
    }
    Ok(out)
}

/// Converts UTF-16 code units to a UTF-8 byte sequence, combining surrogate
/// pairs into single scalar values first.
///
/// # Errors
///
/// Fails if `units` contains a lone surrogate (see [`crate::validate_utf16`]).
pub fn utf16_to_utf8(units: &[u16]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(units.len() * 3);
    let mut offset = 0;
    while offset < units.len() {
        let (value, len) = next_scalar_utf16(units, offset)?;
        push_utf8(value, &mut out);
        offset += len;
    }
    Ok(out)
}

/// Converts UTF-16 code units to UTF-32 code units.
///
/// # Errors
///
/// Fails if `units` contains a lone surrogate.
pub fn utf16_to_utf32(units: &[u16]) -> Result<Vec<u32>, Error> {
    let mut out = Vec::with_capacity(units.len());
    let mut offset = 0;
    while offset < units.len() {
        let (value, len) = next_scalar_utf16(units, offset)?;
        out.push(value);
        offset += len;
    }
    Ok(out)
}

/// Converts UTF-32 code units to a UTF-8 byte sequence.
///
/// # Errors
///
/// Fails with [`Error::CodePointOutOfRange`] if any unit is above U+10FFFF.
pub fn utf32_to_utf8(units: &[u32]) -> Result<Vec<u8>, Error> {
    validate_utf32(units)?;
    let mut out = Vec::with_capacity(units.len() * 4);
    for &value in units {
        push_utf8(value, &mut out);
    }
    Ok(out)
}

/// Converts UTF-32 code units to UTF-16 code units, expanding values at or
/// above 0x10000 into surrogate pairs.
///
/// # Errors
///
/// Fails with [`Error::CodePointOutOfRange`] if any unit is above U+10FFFF.
pub fn utf32_to_utf16(units: &[u32]) -> Result<Vec<u16>, Error> {
    validate_utf32(units)?;
    let mut out = Vec::with_capacity(units.len());
    for &value in units {
        push_utf16(value, &mut out);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{
        utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf16_to_utf32, utf32_to_utf8, utf32_to_utf16,
    };
    use crate::error::{Error, Utf16Error};

    #[test]
    fn emoji_surrogate_pair_combines() {
        // U+1F600 is {0xD83D, 0xDE00} in UTF-16 and F0 9F 98 80 in UTF-8.
        assert_eq!(utf16_to_utf8(&[0xD83D, 0xDE00]).unwrap(), [0xF0, 0x9F, 0x98, 0x80]);
        assert_eq!(utf16_to_utf32(&[0xD83D, 0xDE00]).unwrap(), [0x1F600]);
        assert_eq!(utf8_to_utf16(&[0xF0, 0x9F, 0x98, 0x80]).unwrap(), [0xD83D, 0xDE00]);
        assert_eq!(utf32_to_utf16(&[0x1F600]).unwrap(), [0xD83D, 0xDE00]);
    }

    #[test]
    fn two_and_three_byte_runs() {
        // é (U+00E9) and 世 (U+4E16).
        assert_eq!(utf16_to_utf8(&[0x00E9]).unwrap(), [0xC3, 0xA9]);
        assert_eq!(utf16_to_utf8(&[0x4E16]).unwrap(), [0xE4, 0xB8, 0x96]);
        assert_eq!(utf8_to_utf32(&[0xE4, 0xB8, 0x96]).unwrap(), [0x4E16]);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(utf16_to_utf8(&[]).unwrap(), Vec::<u8>::new());
        assert_eq!(utf32_to_utf8(&[]).unwrap(), Vec::<u8>::new());
        assert_eq!(utf8_to_utf16(&[]).unwrap(), Vec::<u16>::new());
    }

    #[test]
    fn malformed_input_is_rejected_before_output() {
        assert_eq!(
            utf16_to_utf8(&[0x41, 0xDC00]),
            Err(Error::MalformedUtf16(Utf16Error::LoneLowSurrogate { unit: 0xDC00, offset: 1 }))
        );
        assert_eq!(
            utf32_to_utf16(&[0x11_0000]),
            Err(Error::CodePointOutOfRange { value: 0x11_0000, offset: 0 })
        );
    }

    #[test]
    fn utf16_utf32_directly_matches_composition_through_utf8() {
        let units: Vec<u16> = "Aあ😀 plain text".encode_utf16().collect();
        let direct = utf16_to_utf32(&units).unwrap();
        let composed = utf8_to_utf32(&utf16_to_utf8(&units).unwrap()).unwrap();
        assert_eq!(direct, composed);
        assert_eq!(utf32_to_utf16(&direct).unwrap(), units);
    }
}
