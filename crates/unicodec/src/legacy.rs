//! Lossy mappings to and from the legacy byte encodings US-ASCII and
//! ISO-8859-1, plus the four-byte ISO-10646 form.
//!
//! The outgoing directions substitute `?` for unmappable units and never
//! fail. The incoming directions zero-extend each byte and always succeed,
//! since every byte value is a valid code unit in both ranges.
#![allow(clippy::cast_possible_truncation)]

use alloc::vec::Vec;

use crate::bytes::{utf16_to_utf32_bytes, utf32_bytes_to_utf16, utf32_bytes_to_utf32,
                   utf32_to_utf32_bytes};
use crate::error::Error;

/// The substitution byte emitted for unmappable units.
pub const SUBSTITUTE: u8 = b'?';

/// Maps UTF-16 code units to US-ASCII bytes, substituting `?` for any unit
/// above 0x7F. Intentionally lossy; never fails.
#[must_use]
pub fn utf16_to_ascii_bytes(units: &[u16]) -> Vec<u8> {
    units
        .iter()
        .map(|&unit| if unit <= 0x7F { unit as u8 } else { SUBSTITUTE })
        .collect()
}

/// Maps UTF-16 code units to ISO-8859-1 bytes, substituting `?` for any unit
/// above 0xFF. Intentionally lossy; never fails.
#[must_use]
pub fn utf16_to_latin1_bytes(units: &[u16]) -> Vec<u8> {
    units
        .iter()
        .map(|&unit| if unit <= 0xFF { unit as u8 } else { SUBSTITUTE })
        .collect()
}

/// Maps US-ASCII bytes to UTF-16 code units by zero-extension.
#[must_use]
pub fn ascii_bytes_to_utf16(bytes: &[u8]) -> Vec<u16> {
    bytes.iter().map(|&b| u16::from(b)).collect()
}

/// Maps ISO-8859-1 bytes to UTF-16 code units by zero-extension.
#[must_use]
pub fn latin1_bytes_to_utf16(bytes: &[u8]) -> Vec<u16> {
    bytes.iter().map(|&b| u16::from(b)).collect()
}

/// Serializes UTF-16 code units in the four-byte big-endian ISO-10646 form.
///
/// # Errors
///
/// Fails if `units` is not well-formed UTF-16.
pub fn utf16_to_iso_10646_bytes(units: &[u16]) -> Result<Vec<u8>, Error> {
    utf16_to_utf32_bytes(units)
}

/// Serializes UTF-32 code units in the four-byte big-endian ISO-10646 form.
///
/// # Errors
///
/// Fails with [`Error::CodePointOutOfRange`] if any unit is above U+10FFFF.
pub fn utf32_to_iso_10646_bytes(units: &[u32]) -> Result<Vec<u8>, Error> {
    utf32_to_utf32_bytes(units)
}

/// Decodes four-byte big-endian ISO-10646 bytes into UTF-16 code units.
///
/// # Errors
///
/// Fails with [`Error::InvalidBufferLength`] if the byte count is not a
/// multiple of four, or [`Error::CodePointOutOfRange`] on an out-of-range
/// value.
pub fn iso_10646_bytes_to_utf16(bytes: &[u8]) -> Result<Vec<u16>, Error> {
    utf32_bytes_to_utf16(bytes)
}

/// Decodes four-byte big-endian ISO-10646 bytes into UTF-32 code units.
///
/// # Errors
///
/// Fails as [`iso_10646_bytes_to_utf16`] does.
pub fn iso_10646_bytes_to_utf32(bytes: &[u8]) -> Result<Vec<u32>, Error> {
    utf32_bytes_to_utf32(bytes)
}
