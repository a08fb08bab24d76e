use thiserror::Error;

use crate::bytes::Encoding;

/// Failure detected while scanning a UTF-8 byte sequence.
///
/// `offset` is always the byte index of the first offending byte, so callers
/// can point at the exact position in the input buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Utf8Error {
    /// The byte does not match any of the recognized lead-byte patterns
    /// (`0xxxxxxx`, `110xxxxx`, `1110xxxx`, `11110xxx`).
    #[error("invalid lead byte {byte:#04x} at offset {offset}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Byte index of the offending byte.
        offset: usize,
    },
    /// A multi-byte run ended before all its continuation bytes, or a byte in
    /// continuation position does not match `10xxxxxx`.
    #[error("missing or invalid continuation byte at offset {offset}")]
    MissingContinuation {
        /// Byte index where a continuation byte was expected.
        offset: usize,
    },
    /// The run uses more bytes than the minimum its scalar value requires.
    #[error("overlong encoding at offset {offset}")]
    OverlongEncoding {
        /// Byte index of the run's lead byte.
        offset: usize,
    },
}

/// Failure detected while scanning a UTF-16 code-unit sequence.
///
/// `offset` is the unit index (not the byte index) of the offending unit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Utf16Error {
    /// A high surrogate (0xD800–0xDBFF) not immediately followed by a low
    /// surrogate, including one at the very end of the input.
    #[error("lone high surrogate {unit:#06x} at unit {offset}")]
    LoneHighSurrogate {
        /// The offending code unit.
        unit: u16,
        /// Unit index of the offending code unit.
        offset: usize,
    },
    /// A low surrogate (0xDC00–0xDFFF) with no preceding high surrogate.
    #[error("lone low surrogate {unit:#06x} at unit {offset}")]
    LoneLowSurrogate {
        /// The offending code unit.
        unit: u16,
        /// Unit index of the offending code unit.
        offset: usize,
    },
}

/// Any failure the transcoding engine can report.
///
/// All variants are caller-recoverable; the engine never produces partial
/// results. Failures carry the position of the first malformed element.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// The input is not well-formed UTF-8.
    #[error("malformed UTF-8: {0}")]
    MalformedUtf8(#[from] Utf8Error),
    /// The input is not well-formed UTF-16.
    #[error("malformed UTF-16: {0}")]
    MalformedUtf16(#[from] Utf16Error),
    /// A code point, either a UTF-32 unit or a value assembled from a
    /// multi-unit run, lies above the Unicode maximum U+10FFFF.
    #[error("code point {value:#x} at unit {offset} is above U+10FFFF")]
    CodePointOutOfRange {
        /// The out-of-range value.
        value: u32,
        /// Index (byte or unit, matching the input width) of the run that
        /// produced the value.
        offset: usize,
    },
    /// A byte buffer's length is not a multiple of the fixed code-unit width
    /// it is being decoded under.
    #[error("buffer length {len} is not a multiple of the {width}-byte code unit width")]
    InvalidBufferLength {
        /// Total buffer length in bytes.
        len: usize,
        /// Code-unit width in bytes.
        width: usize,
    },
    /// The buffer starts with a BOM from a different encoding family than the
    /// decode entry point expects.
    #[error("buffer carries a {found} BOM but {expected} input was expected")]
    EncodingMismatch {
        /// The encoding the entry point was going to decode.
        expected: Encoding,
        /// The encoding announced by the BOM.
        found: Encoding,
    },
}
