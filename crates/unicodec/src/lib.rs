//! Strict conversion between Unicode transcoding forms (UTF-8, UTF-16,
//! UTF-32), the platform wide-character form, and raw byte buffers with
//! byte-order and BOM handling, plus lossy legacy encodings (US-ASCII,
//! ISO-8859-1).
//!
//! Every operation is a pure function over slices: inputs are borrowed,
//! outputs are freshly allocated, and nothing is cached between calls, so
//! every entry point is safe to use from any number of threads. Malformed
//! input fails at the first offending element with a discriminated
//! [`Error`]; there are no partial results. The two intentionally lossy
//! exceptions are the legacy US-ASCII/ISO-8859-1 encoders, which substitute
//! `?` instead of failing.
//!
//! # Examples
//!
//! ```rust
//! use unicodec::{Encoding, encode, utf8_bytes_to_utf16, utf16_to_utf8};
//!
//! let units: Vec<u16> = "Aあ😀".encode_utf16().collect();
//! let utf8 = utf16_to_utf8(&units)?;
//! assert_eq!(utf8, "Aあ😀".as_bytes());
//!
//! // Serialize with a BOM and parse it back.
//! let bytes = encode(&units, Encoding::Utf8, true)?;
//! assert_eq!(utf8_bytes_to_utf16(&bytes)?, units);
//! # Ok::<(), unicodec::Error>(())
//! ```
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod bytes;
mod error;
mod legacy;
mod transcode;
mod validate;
mod wide;

#[cfg(test)]
mod tests;

pub use bytes::{
    BOM_UTF8, BOM_UTF16BE, BOM_UTF16LE, Encoding, detect_bom, encode, utf8_bytes_to_utf16,
    utf16_bytes_to_utf16, utf16_to_utf8_bytes, utf16_to_utf16_bytes, utf16_to_utf16be_bytes,
    utf16_to_utf16le_bytes, utf16_to_utf32_bytes, utf16be_bytes_to_utf16, utf16le_bytes_to_utf16,
    utf32_bytes_to_utf16, utf32_bytes_to_utf32, utf32_to_utf32_bytes,
};
pub use error::{Error, Utf8Error, Utf16Error};
pub use legacy::{
    SUBSTITUTE, ascii_bytes_to_utf16, iso_10646_bytes_to_utf16, iso_10646_bytes_to_utf32,
    latin1_bytes_to_utf16, utf16_to_ascii_bytes, utf16_to_iso_10646_bytes, utf16_to_latin1_bytes,
    utf32_to_iso_10646_bytes,
};
pub use transcode::{
    utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf16_to_utf32, utf32_to_utf8, utf32_to_utf16,
};
pub use validate::{validate_utf8, validate_utf16, validate_utf32};
pub use wide::{
    CodePage, NativeCodePage, Utf8CodePage, WideUnit, narrow_to_wide, narrow_to_wide_with,
    utf8_to_wide, utf16_to_wide, wide_to_narrow, wide_to_narrow_with, wide_to_utf8, wide_to_utf16,
};
