//! Byte codecs: serializing code-unit sequences to raw byte buffers and
//! parsing byte buffers back, with byte-order and BOM handling.
//!
//! Serialization takes the canonical UTF-16 form (or UTF-32 for the fixed
//! four-byte codec) and emits bytes under a caller-chosen [`Encoding`],
//! optionally BOM-prefixed. Deserialization auto-detects a leading BOM in
//! priority order UTF-8, UTF-16LE, UTF-16BE, and fails with
//! [`Error::EncodingMismatch`] when the detected family disagrees with the
//! entry point instead of silently reinterpreting.

use alloc::vec::Vec;
use core::fmt;

use crate::error::Error;
use crate::legacy;
use crate::transcode::{utf8_to_utf16, utf16_to_utf8, utf16_to_utf32, utf32_to_utf16};
use crate::validate::{validate_utf16, validate_utf32};

/// UTF-8 byte-order mark: EF BB BF.
pub const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// Big-endian UTF-16 byte-order mark: FE FF.
pub const BOM_UTF16BE: [u8; 2] = [0xFE, 0xFF];
/// Little-endian UTF-16 byte-order mark: FF FE.
pub const BOM_UTF16LE: [u8; 2] = [0xFF, 0xFE];

/// The closed set of byte encodings the codec can serialize to and parse
/// from.
///
/// Each tag defines a mapping between scalar values and byte runs; UTF-8 and
/// the two UTF-16 orders additionally define a BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// UTF-8.
    Utf8,
    /// UTF-16, big-endian byte order.
    Utf16Be,
    /// UTF-16, little-endian byte order.
    Utf16Le,
    /// UTF-32 in fixed big-endian byte order, the four-byte "ISO-10646"
    /// form. No BOM is defined for it here.
    Utf32Be,
    /// US-ASCII, lossy outside 0x00–0x7F.
    UsAscii,
    /// ISO-8859-1 (Latin-1), lossy outside 0x00–0xFF.
    Latin1,
}

impl Encoding {
    /// Returns the BOM literal for this encoding, if one is defined.
    #[must_use]
    pub fn bom(self) -> Option<&'static [u8]> {
        match self {
            Encoding::Utf8 => Some(&BOM_UTF8),
            Encoding::Utf16Be => Some(&BOM_UTF16BE),
            Encoding::Utf16Le => Some(&BOM_UTF16LE),
            Encoding::Utf32Be | Encoding::UsAscii | Encoding::Latin1 => None,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf32Be => "UTF-32BE",
            Encoding::UsAscii => "US-ASCII",
            Encoding::Latin1 => "ISO-8859-1",
        };
        f.write_str(name)
    }
}

/// Identifies the encoding announced by a leading BOM, if any.
///
/// Detection priority is UTF-8, then UTF-16LE, then UTF-16BE.
#[must_use]
pub fn detect_bom(bytes: &[u8]) -> Option<Encoding> {
    if bytes.starts_with(&BOM_UTF8) {
        Some(Encoding::Utf8)
    } else if bytes.starts_with(&BOM_UTF16LE) {
        Some(Encoding::Utf16Le)
    } else if bytes.starts_with(&BOM_UTF16BE) {
        Some(Encoding::Utf16Be)
    } else {
        None
    }
}

fn with_bom(bom: &[u8], body: Vec<u8>, add_bom: bool) -> Vec<u8> {
    if !add_bom {
        return body;
    }
    let mut out = Vec::with_capacity(bom.len() + body.len());
    out.extend_from_slice(bom);
    out.extend_from_slice(&body);
    out
}

/// Serializes UTF-16 code units as UTF-8 bytes, optionally prefixed with the
/// UTF-8 BOM.
///
/// # Errors
///
/// Fails if `units` is not well-formed UTF-16.
pub fn utf16_to_utf8_bytes(units: &[u16], add_bom: bool) -> Result<Vec<u8>, Error> {
    Ok(with_bom(&BOM_UTF8, utf16_to_utf8(units)?, add_bom))
}

/// Serializes UTF-16 code units as big-endian bytes, optionally prefixed
/// with the big-endian BOM.
///
/// # Errors
///
/// Fails if `units` is not well-formed UTF-16.
pub fn utf16_to_utf16be_bytes(units: &[u16], add_bom: bool) -> Result<Vec<u8>, Error> {
    validate_utf16(units)?;
    let mut body = Vec::with_capacity(units.len() * 2);
    for &unit in units {
        body.extend_from_slice(&unit.to_be_bytes());
    }
    Ok(with_bom(&BOM_UTF16BE, body, add_bom))
}

/// Serializes UTF-16 code units as little-endian bytes, optionally prefixed
/// with the little-endian BOM.
///
/// # Errors
///
/// Fails if `units` is not well-formed UTF-16.
pub fn utf16_to_utf16le_bytes(units: &[u16], add_bom: bool) -> Result<Vec<u8>, Error> {
    validate_utf16(units)?;
    let mut body = Vec::with_capacity(units.len() * 2);
    for &unit in units {
        body.extend_from_slice(&unit.to_le_bytes());
    }
    Ok(with_bom(&BOM_UTF16LE, body, add_bom))
}

/// Serializes UTF-16 code units as UTF-16 bytes in the default big-endian
/// order.
///
/// # Errors
///
/// Fails if `units` is not well-formed UTF-16.
pub fn utf16_to_utf16_bytes(units: &[u16], add_bom: bool) -> Result<Vec<u8>, Error> {
    utf16_to_utf16be_bytes(units, add_bom)
}

/// Serializes UTF-32 code units as four bytes each, most-significant byte
/// first. No BOM is defined for this form.
///
/// # Errors
///
/// Fails with [`Error::CodePointOutOfRange`] if any unit is above U+10FFFF.
pub fn utf32_to_utf32_bytes(units: &[u32]) -> Result<Vec<u8>, Error> {
    validate_utf32(units)?;
    let mut out = Vec::with_capacity(units.len() * 4);
    for &unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    Ok(out)
}

/// Serializes UTF-16 code units as big-endian UTF-32 bytes, combining
/// surrogate pairs first.
///
/// # Errors
///
/// Fails if `units` is not well-formed UTF-16.
pub fn utf16_to_utf32_bytes(units: &[u16]) -> Result<Vec<u8>, Error> {
    utf32_to_utf32_bytes(&utf16_to_utf32(units)?)
}

/// Serializes UTF-16 code units under any supported [`Encoding`].
///
/// `add_bom` is honored where the encoding defines a BOM and ignored
/// otherwise. The US-ASCII and ISO-8859-1 arms are lossy and substitute `?`
/// for unmappable units instead of failing.
///
/// # Errors
///
/// Fails if `units` is not well-formed UTF-16 (the lossy legacy arms never
/// fail).
pub fn encode(units: &[u16], encoding: Encoding, add_bom: bool) -> Result<Vec<u8>, Error> {
    match encoding {
        Encoding::Utf8 => utf16_to_utf8_bytes(units, add_bom),
        Encoding::Utf16Be => utf16_to_utf16be_bytes(units, add_bom),
        Encoding::Utf16Le => utf16_to_utf16le_bytes(units, add_bom),
        Encoding::Utf32Be => utf16_to_utf32_bytes(units),
        Encoding::UsAscii => Ok(legacy::utf16_to_ascii_bytes(units)),
        Encoding::Latin1 => Ok(legacy::utf16_to_latin1_bytes(units)),
    }
}

/// Parses a UTF-8-oriented byte buffer into UTF-16 code units.
///
/// A leading UTF-8 BOM is stripped; a UTF-16 BOM of either order fails as a
/// mismatch; without a BOM the buffer is decoded as UTF-8.
///
/// # Errors
///
/// Fails with [`Error::EncodingMismatch`] on a UTF-16 BOM, or with a UTF-8
/// diagnostic if the remainder is malformed.
pub fn utf8_bytes_to_utf16(bytes: &[u8]) -> Result<Vec<u16>, Error> {
    match detect_bom(bytes) {
        Some(Encoding::Utf8) => utf8_to_utf16(&bytes[BOM_UTF8.len()..]),
        Some(found @ (Encoding::Utf16Le | Encoding::Utf16Be)) => {
            Err(Error::EncodingMismatch { expected: Encoding::Utf8, found })
        }
        _ => utf8_to_utf16(bytes),
    }
}

/// Parses a UTF-16-oriented byte buffer into UTF-16 code units.
///
/// A leading UTF-16 BOM selects the byte order and is stripped; a UTF-8 BOM
/// fails as a mismatch; without a BOM the buffer is decoded big-endian.
///
/// # Errors
///
/// Fails with [`Error::EncodingMismatch`] on a UTF-8 BOM, with
/// [`Error::InvalidBufferLength`] on an odd byte count, or with a UTF-16
/// diagnostic if the decoded units are malformed.
pub fn utf16_bytes_to_utf16(bytes: &[u8]) -> Result<Vec<u16>, Error> {
    match detect_bom(bytes) {
        Some(found @ Encoding::Utf8) => {
            Err(Error::EncodingMismatch { expected: Encoding::Utf16Be, found })
        }
        Some(Encoding::Utf16Le) => utf16le_bytes_to_utf16(&bytes[BOM_UTF16LE.len()..]),
        Some(Encoding::Utf16Be) => utf16be_bytes_to_utf16(&bytes[BOM_UTF16BE.len()..]),
        _ => utf16be_bytes_to_utf16(bytes),
    }
}

fn utf16_bytes_to_units(bytes: &[u8], pair: fn([u8; 2]) -> u16) -> Result<Vec<u16>, Error> {
    if bytes.len() % 2 != 0 {
        return Err(Error::InvalidBufferLength { len: bytes.len(), width: 2 });
    }
    let units: Vec<u16> = bytes.chunks_exact(2).map(|c| pair([c[0], c[1]])).collect();
    validate_utf16(&units)?;
    Ok(units)
}

/// Decodes big-endian UTF-16 bytes into code units.
///
/// # Errors
///
/// Fails with [`Error::InvalidBufferLength`] on an odd byte count, or with a
/// UTF-16 diagnostic if the decoded units are malformed.
pub fn utf16be_bytes_to_utf16(bytes: &[u8]) -> Result<Vec<u16>, Error> {
    utf16_bytes_to_units(bytes, u16::from_be_bytes)
}

/// Decodes little-endian UTF-16 bytes into code units, pairing bytes in
/// (low, high) order per unit.
///
/// The full declared length is decoded; an embedded NUL is an ordinary code
/// unit, not a terminator.
///
/// # Errors
///
/// Fails with [`Error::InvalidBufferLength`] on an odd byte count, or with a
/// UTF-16 diagnostic if the decoded units are malformed.
pub fn utf16le_bytes_to_utf16(bytes: &[u8]) -> Result<Vec<u16>, Error> {
    utf16_bytes_to_units(bytes, u16::from_le_bytes)
}

/// Decodes big-endian UTF-32 bytes into code units.
///
/// # Errors
///
/// Fails with [`Error::InvalidBufferLength`] if the byte count is not a
/// multiple of four, or with [`Error::CodePointOutOfRange`] if an assembled
/// value is above U+10FFFF.
pub fn utf32_bytes_to_utf32(bytes: &[u8]) -> Result<Vec<u32>, Error> {
    if bytes.len() % 4 != 0 {
        return Err(Error::InvalidBufferLength { len: bytes.len(), width: 4 });
    }
    let units: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    validate_utf32(&units)?;
    Ok(units)
}

/// Decodes big-endian UTF-32 bytes into UTF-16 code units.
///
/// # Errors
///
/// Fails as [`utf32_bytes_to_utf32`] does.
pub fn utf32_bytes_to_utf16(bytes: &[u8]) -> Result<Vec<u16>, Error> {
    utf32_to_utf16(&utf32_bytes_to_utf32(bytes)?)
}
