//! Well-formedness checks for the three Unicode transcoding forms.
//!
//! The single-scalar decoders here are the one source of truth for both
//! validation and conversion: [`crate::transcode`] drives the same routines,
//! so a malformed input fails with an identical diagnostic whichever entry
//! point sees it first.

use crate::error::{Error, Utf8Error, Utf16Error};

/// Largest Unicode scalar value.
pub(crate) const MAX_SCALAR: u32 = 0x10_FFFF;

const HIGH_SURROGATE: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATE: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Decodes one scalar value from `bytes` starting at `offset`, returning the
/// value and the number of bytes consumed.
///
/// Callers guarantee `offset < bytes.len()`.
pub(crate) fn next_scalar_utf8(bytes: &[u8], offset: usize) -> Result<(u32, usize), Error> {
    let b0 = bytes[offset];
    if b0 & 0x80 == 0 {
        return Ok((u32::from(b0), 1));
    }
    let (len, lead_bits) = if b0 & 0xE0 == 0xC0 {
        // 0xC0/0xC1 would decode to a value below 0x80.
        if b0 == 0xC0 || b0 == 0xC1 {
            return Err(Utf8Error::OverlongEncoding { offset }.into());
        }
        (2, u32::from(b0 & 0x1F))
    } else if b0 & 0xF0 == 0xE0 {
        (3, u32::from(b0 & 0x0F))
    } else if b0 & 0xF8 == 0xF0 {
        (4, u32::from(b0 & 0x07))
    } else {
        return Err(Utf8Error::InvalidLeadByte { byte: b0, offset }.into());
    };

    let mut value = lead_bits;
    for i in 1..len {
        match bytes.get(offset + i) {
            Some(&b) if b & 0xC0 == 0x80 => value = (value << 6) | u32::from(b & 0x3F),
            _ => return Err(Utf8Error::MissingContinuation { offset: offset + i }.into()),
        }
    }

    // A 3-byte run below 0x800 or a 4-byte run below 0x10000 wastes a byte.
    if (len == 3 && value < 0x800) || (len == 4 && value < 0x10000) {
        return Err(Utf8Error::OverlongEncoding { offset }.into());
    }
    if value > MAX_SCALAR {
        return Err(Error::CodePointOutOfRange { value, offset });
    }
    Ok((value, len))
}

/// Decodes one scalar value from `units` starting at `offset`, returning the
/// value and the number of units consumed (1, or 2 for a surrogate pair).
///
/// Callers guarantee `offset < units.len()`.
pub(crate) fn next_scalar_utf16(units: &[u16], offset: usize) -> Result<(u32, usize), Error> {
    let u0 = units[offset];
    if HIGH_SURROGATE.contains(&u0) {
        match units.get(offset + 1) {
            Some(&u1) if LOW_SURROGATE.contains(&u1) => {
                let hi = u32::from(u0 & 0x3FF);
                let lo = u32::from(u1 & 0x3FF);
                Ok((0x10000 + ((hi << 10) | lo), 2))
            }
            _ => Err(Utf16Error::LoneHighSurrogate { unit: u0, offset }.into()),
        }
    } else if LOW_SURROGATE.contains(&u0) {
        Err(Utf16Error::LoneLowSurrogate { unit: u0, offset }.into())
    } else {
        Ok((u32::from(u0), 1))
    }
}

/// Checks that `bytes` is a well-formed UTF-8 sequence.
///
/// Rejects unrecognized lead bytes, missing or malformed continuation bytes,
/// overlong encodings, and runs decoding above U+10FFFF.
///
/// # Errors
///
/// Fails at the first malformed byte with the matching [`Utf8Error`] variant
/// (or [`Error::CodePointOutOfRange`] for an out-of-range 4-byte run).
pub fn validate_utf8(bytes: &[u8]) -> Result<(), Error> {
    let mut offset = 0;
    while offset < bytes.len() {
        let (_, len) = next_scalar_utf8(bytes, offset)?;
        offset += len;
    }
    Ok(())
}

/// Checks that `units` is a well-formed UTF-16 sequence: every high surrogate
/// is immediately followed by a low surrogate, and no low surrogate stands
/// alone.
///
/// # Errors
///
/// Fails at the first lone surrogate with the matching [`Utf16Error`] variant.
pub fn validate_utf16(units: &[u16]) -> Result<(), Error> {
    let mut offset = 0;
    while offset < units.len() {
        let (_, len) = next_scalar_utf16(units, offset)?;
        offset += len;
    }
    Ok(())
}

/// Checks that every unit of `units` is a scalar value at or below U+10FFFF.
///
/// # Errors
///
/// Fails with [`Error::CodePointOutOfRange`] at the first unit above the
/// maximum.
pub fn validate_utf32(units: &[u32]) -> Result<(), Error> {
    for (offset, &value) in units.iter().enumerate() {
        if value > MAX_SCALAR {
            return Err(Error::CodePointOutOfRange { value, offset });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_utf8, validate_utf16, validate_utf32};
    use crate::error::{Error, Utf8Error, Utf16Error};

    #[test]
    fn ascii_and_multibyte_pass() {
        validate_utf8(b"ascii only").unwrap();
        validate_utf8("Aあ😀".as_bytes()).unwrap();
        validate_utf8(&[]).unwrap();
    }

    #[test]
    fn overlong_two_byte() {
        assert_eq!(
            validate_utf8(&[0xC0, 0x80]),
            Err(Error::MalformedUtf8(Utf8Error::OverlongEncoding { offset: 0 }))
        );
        assert_eq!(
            validate_utf8(&[0x41, 0xC1, 0xBF]),
            Err(Error::MalformedUtf8(Utf8Error::OverlongEncoding { offset: 1 }))
        );
    }

    #[test]
    fn overlong_three_and_four_byte() {
        // 0xE0 0x9F 0xBF decodes to 0x7FF, which fits in two bytes.
        assert_eq!(
            validate_utf8(&[0xE0, 0x9F, 0xBF]),
            Err(Error::MalformedUtf8(Utf8Error::OverlongEncoding { offset: 0 }))
        );
        // 0xF0 0x8F 0xBF 0xBF decodes to 0xFFFF, which fits in three bytes.
        assert_eq!(
            validate_utf8(&[0xF0, 0x8F, 0xBF, 0xBF]),
            Err(Error::MalformedUtf8(Utf8Error::OverlongEncoding { offset: 0 }))
        );
        // 0xE0 0xA0 0x80 is the smallest legal three-byte run (U+0800).
        validate_utf8(&[0xE0, 0xA0, 0x80]).unwrap();
        // 0xF0 0x90 0x80 0x80 is the smallest legal four-byte run (U+10000).
        validate_utf8(&[0xF0, 0x90, 0x80, 0x80]).unwrap();
    }

    #[test]
    fn invalid_lead_byte() {
        assert_eq!(
            validate_utf8(&[0xFF]),
            Err(Error::MalformedUtf8(Utf8Error::InvalidLeadByte { byte: 0xFF, offset: 0 }))
        );
        // A continuation byte in lead position.
        assert_eq!(
            validate_utf8(&[0x80]),
            Err(Error::MalformedUtf8(Utf8Error::InvalidLeadByte { byte: 0x80, offset: 0 }))
        );
    }

    #[test]
    fn missing_continuation() {
        // Truncated "あ" (0xE3 0x81 0x82).
        assert_eq!(
            validate_utf8(&[0xE3, 0x81]),
            Err(Error::MalformedUtf8(Utf8Error::MissingContinuation { offset: 2 }))
        );
        // Non-continuation byte in continuation position.
        assert_eq!(
            validate_utf8(&[0xE3, 0x41, 0x82]),
            Err(Error::MalformedUtf8(Utf8Error::MissingContinuation { offset: 1 }))
        );
    }

    #[test]
    fn four_byte_above_maximum() {
        // 0xF4 0x90 0x80 0x80 decodes to 0x110000.
        assert_eq!(
            validate_utf8(&[0xF4, 0x90, 0x80, 0x80]),
            Err(Error::CodePointOutOfRange { value: 0x11_0000, offset: 0 })
        );
        // 0xF5 leads runs that can only decode above the maximum.
        assert!(matches!(
            validate_utf8(&[0xF5, 0x80, 0x80, 0x80]),
            Err(Error::CodePointOutOfRange { .. })
        ));
    }

    #[test]
    fn surrogate_pairs_pass() {
        validate_utf16(&[0x0041, 0x3042, 0xD83D, 0xDE00]).unwrap();
        validate_utf16(&[]).unwrap();
    }

    #[test]
    fn lone_high_surrogate() {
        assert_eq!(
            validate_utf16(&[0xD800]),
            Err(Error::MalformedUtf16(Utf16Error::LoneHighSurrogate { unit: 0xD800, offset: 0 }))
        );
        // High surrogate followed by a non-surrogate.
        assert_eq!(
            validate_utf16(&[0x41, 0xD83D, 0x42]),
            Err(Error::MalformedUtf16(Utf16Error::LoneHighSurrogate { unit: 0xD83D, offset: 1 }))
        );
    }

    #[test]
    fn lone_low_surrogate() {
        assert_eq!(
            validate_utf16(&[0xDC00]),
            Err(Error::MalformedUtf16(Utf16Error::LoneLowSurrogate { unit: 0xDC00, offset: 0 }))
        );
    }

    #[test]
    fn utf32_range() {
        validate_utf32(&[0x41, 0x3042, 0x1F600, 0x10_FFFF]).unwrap();
        assert_eq!(
            validate_utf32(&[0x41, 0x11_0000]),
            Err(Error::CodePointOutOfRange { value: 0x11_0000, offset: 1 })
        );
    }
}
