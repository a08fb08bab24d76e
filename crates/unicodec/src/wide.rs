//! Conversions to and from the platform wide-character form.
//!
//! `wchar_t` is 16 bits wide on Windows, where the wide form is UTF-16 and
//! narrow text lives in the process's active code page, and 32 bits wide on
//! the Unix family, where the wide form is UTF-32 and narrow text is UTF-8.
//! The strategy is selected at compile time; the code-page conversion the
//! 16-bit platforms need from the OS is behind the injectable [`CodePage`]
//! collaborator, with [`NativeCodePage`] as the real implementation and
//! [`Utf8CodePage`] as a pure in-process stand-in.
//!
//! Wide-side input is treated as pre-validated OS-native data: conversions
//! that merely re-tag units of the matching width do not validate it.
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use alloc::vec::Vec;

use crate::error::Error;
#[cfg(not(windows))]
use crate::transcode::{utf8_to_utf32, utf16_to_utf32, utf32_to_utf8, utf32_to_utf16};
#[cfg(windows)]
use crate::transcode::{utf8_to_utf16, utf16_to_utf8};
#[cfg(windows)]
use crate::validate::validate_utf16;

/// The platform wide code unit (`wchar_t`).
pub type WideUnit = libc::wchar_t;

/// An OS code-page conversion service between narrow multibyte text and the
/// wide form.
///
/// A zero-length reply is a valid empty result, never an error; only
/// malformed input on in-process implementations fails.
pub trait CodePage {
    /// Converts narrow code-page bytes to wide units.
    ///
    /// # Errors
    ///
    /// Implementation-defined; in-process implementations fail on malformed
    /// input.
    fn narrow_to_wide(&self, bytes: &[u8]) -> Result<Vec<WideUnit>, Error>;

    /// Converts wide units to narrow code-page bytes.
    ///
    /// # Errors
    ///
    /// Implementation-defined; in-process implementations fail on malformed
    /// input.
    fn wide_to_narrow(&self, wide: &[WideUnit]) -> Result<Vec<u8>, Error>;
}

/// The platform's own code-page conversion: the Win32 active code page on
/// Windows, plain UTF-8 transcoding elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCodePage;

/// A [`CodePage`] that treats narrow text as UTF-8 on every platform.
///
/// Useful as a deterministic test double and on platforms whose narrow
/// encoding is known to be UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8CodePage;

impl CodePage for Utf8CodePage {
    fn narrow_to_wide(&self, bytes: &[u8]) -> Result<Vec<WideUnit>, Error> {
        #[cfg(windows)]
        {
            Ok(utf8_to_utf16(bytes)?.into_iter().map(|u| u as WideUnit).collect())
        }
        #[cfg(not(windows))]
        {
            Ok(utf32_as_wide(&utf8_to_utf32(bytes)?))
        }
    }

    fn wide_to_narrow(&self, wide: &[WideUnit]) -> Result<Vec<u8>, Error> {
        #[cfg(windows)]
        {
            utf16_to_utf8(&wide_as_utf16(wide))
        }
        #[cfg(not(windows))]
        {
            utf32_to_utf8(&wide_as_utf32(wide))
        }
    }
}

#[cfg(windows)]
impl CodePage for NativeCodePage {
    fn narrow_to_wide(&self, bytes: &[u8]) -> Result<Vec<WideUnit>, Error> {
        Ok(os::acp_to_wide(bytes))
    }

    fn wide_to_narrow(&self, wide: &[WideUnit]) -> Result<Vec<u8>, Error> {
        Ok(os::wide_to_acp(wide))
    }
}

#[cfg(not(windows))]
impl CodePage for NativeCodePage {
    fn narrow_to_wide(&self, bytes: &[u8]) -> Result<Vec<WideUnit>, Error> {
        Utf8CodePage.narrow_to_wide(bytes)
    }

    fn wide_to_narrow(&self, wide: &[WideUnit]) -> Result<Vec<u8>, Error> {
        Utf8CodePage.wide_to_narrow(wide)
    }
}

#[cfg(not(windows))]
fn wide_as_utf32(wide: &[WideUnit]) -> Vec<u32> {
    wide.iter().map(|&w| w as u32).collect()
}

#[cfg(not(windows))]
fn utf32_as_wide(units: &[u32]) -> Vec<WideUnit> {
    units.iter().map(|&u| u as WideUnit).collect()
}

#[cfg(windows)]
fn wide_as_utf16(wide: &[WideUnit]) -> Vec<u16> {
    wide.iter().map(|&w| w as u16).collect()
}

/// Converts UTF-16 code units to the platform wide form.
///
/// On 16-bit-wide platforms this is a validated copy; on 32-bit-wide
/// platforms surrogate pairs combine into single wide units.
///
/// # Errors
///
/// Fails if `units` is not well-formed UTF-16.
pub fn utf16_to_wide(units: &[u16]) -> Result<Vec<WideUnit>, Error> {
    #[cfg(windows)]
    {
        validate_utf16(units)?;
        Ok(units.iter().map(|&u| u as WideUnit).collect())
    }
    #[cfg(not(windows))]
    {
        Ok(utf32_as_wide(&utf16_to_utf32(units)?))
    }
}

/// Converts the platform wide form to UTF-16 code units.
///
/// On 16-bit-wide platforms this is a pure reinterpretation of OS-native
/// data and cannot fail; on 32-bit-wide platforms scalar values at or above
/// 0x10000 expand into surrogate pairs.
///
/// # Errors
///
/// Fails with [`Error::CodePointOutOfRange`] on 32-bit-wide platforms if a
/// wide unit is above U+10FFFF.
pub fn wide_to_utf16(wide: &[WideUnit]) -> Result<Vec<u16>, Error> {
    #[cfg(windows)]
    {
        Ok(wide_as_utf16(wide))
    }
    #[cfg(not(windows))]
    {
        utf32_to_utf16(&wide_as_utf32(wide))
    }
}

/// Converts UTF-8 bytes to the platform wide form.
///
/// Internal transcoding on 32-bit-wide platforms; on 16-bit-wide platforms
/// the text goes through the OS code-page service.
///
/// # Errors
///
/// Fails if `bytes` is not well-formed UTF-8 (in-process path).
pub fn utf8_to_wide(bytes: &[u8]) -> Result<Vec<WideUnit>, Error> {
    #[cfg(windows)]
    {
        NativeCodePage.narrow_to_wide(bytes)
    }
    #[cfg(not(windows))]
    {
        Ok(utf32_as_wide(&utf8_to_utf32(bytes)?))
    }
}

/// Converts the platform wide form to UTF-8 bytes.
///
/// # Errors
///
/// Fails with [`Error::CodePointOutOfRange`] on 32-bit-wide platforms if a
/// wide unit is above U+10FFFF.
pub fn wide_to_utf8(wide: &[WideUnit]) -> Result<Vec<u8>, Error> {
    #[cfg(windows)]
    {
        NativeCodePage.wide_to_narrow(wide)
    }
    #[cfg(not(windows))]
    {
        utf32_to_utf8(&wide_as_utf32(wide))
    }
}

/// Converts narrow native text to the wide form through `code_page`.
///
/// # Errors
///
/// Propagates the code page's failure, if any.
pub fn narrow_to_wide_with<C: CodePage + ?Sized>(
    code_page: &C,
    bytes: &[u8],
) -> Result<Vec<WideUnit>, Error> {
    code_page.narrow_to_wide(bytes)
}

/// Converts the wide form to narrow native text through `code_page`.
///
/// # Errors
///
/// Propagates the code page's failure, if any.
pub fn wide_to_narrow_with<C: CodePage + ?Sized>(
    code_page: &C,
    wide: &[WideUnit],
) -> Result<Vec<u8>, Error> {
    code_page.wide_to_narrow(wide)
}

/// Converts narrow native text to the wide form through [`NativeCodePage`].
///
/// # Errors
///
/// Fails on malformed UTF-8 where the native narrow encoding is UTF-8.
pub fn narrow_to_wide(bytes: &[u8]) -> Result<Vec<WideUnit>, Error> {
    NativeCodePage.narrow_to_wide(bytes)
}

/// Converts the wide form to narrow native text through [`NativeCodePage`].
///
/// # Errors
///
/// Fails with [`Error::CodePointOutOfRange`] on 32-bit-wide platforms if a
/// wide unit is above U+10FFFF.
pub fn wide_to_narrow(wide: &[WideUnit]) -> Result<Vec<u8>, Error> {
    NativeCodePage.wide_to_narrow(wide)
}

#[cfg(windows)]
mod os {
    use alloc::{vec, vec::Vec};
    use core::ptr;

    use libc::{c_int, c_uint};

    use super::WideUnit;

    const CP_ACP: c_uint = 0;

    unsafe extern "system" {
        fn MultiByteToWideChar(
            code_page: c_uint,
            flags: u32,
            mb_str: *const u8,
            mb_len: c_int,
            wide_str: *mut u16,
            wide_len: c_int,
        ) -> c_int;
        fn WideCharToMultiByte(
            code_page: c_uint,
            flags: u32,
            wide_str: *const u16,
            wide_len: c_int,
            mb_str: *mut u8,
            mb_len: c_int,
            default_char: *const u8,
            used_default: *mut c_int,
        ) -> c_int;
    }

    /// A zero-length reply from the OS is a valid empty result.
    pub(super) fn acp_to_wide(bytes: &[u8]) -> Vec<WideUnit> {
        if bytes.is_empty() {
            return Vec::new();
        }
        let mb_len = c_int::try_from(bytes.len()).unwrap_or(c_int::MAX);
        // SAFETY: a null output buffer with zero capacity asks the OS for the
        // required length.
        let len =
            unsafe { MultiByteToWideChar(CP_ACP, 0, bytes.as_ptr(), mb_len, ptr::null_mut(), 0) };
        if len <= 0 {
            return Vec::new();
        }
        let mut out = vec![0u16; len as usize];
        // SAFETY: `out` holds exactly `len` units.
        let written =
            unsafe { MultiByteToWideChar(CP_ACP, 0, bytes.as_ptr(), mb_len, out.as_mut_ptr(), len) };
        out.truncate(written.max(0) as usize);
        out
    }

    /// A zero-length reply from the OS is a valid empty result.
    pub(super) fn wide_to_acp(wide: &[WideUnit]) -> Vec<u8> {
        if wide.is_empty() {
            return Vec::new();
        }
        let wide_len = c_int::try_from(wide.len()).unwrap_or(c_int::MAX);
        // SAFETY: a null output buffer with zero capacity asks the OS for the
        // required length.
        let len = unsafe {
            WideCharToMultiByte(
                CP_ACP,
                0,
                wide.as_ptr(),
                wide_len,
                ptr::null_mut(),
                0,
                ptr::null(),
                ptr::null_mut(),
            )
        };
        if len <= 0 {
            return Vec::new();
        }
        let mut out = vec![0u8; len as usize];
        // SAFETY: `out` holds exactly `len` bytes.
        let written = unsafe {
            WideCharToMultiByte(
                CP_ACP,
                0,
                wide.as_ptr(),
                wide_len,
                out.as_mut_ptr(),
                len,
                ptr::null(),
                ptr::null_mut(),
            )
        };
        out.truncate(written.max(0) as usize);
        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{
        CodePage, Utf8CodePage, WideUnit, utf8_to_wide, utf16_to_wide, wide_to_utf8, wide_to_utf16,
    };
    use crate::error::{Error, Utf16Error};

    #[test]
    fn utf16_wide_round_trip() {
        let units: Vec<u16> = "Aあ😀".encode_utf16().collect();
        let wide = utf16_to_wide(&units).unwrap();
        assert_eq!(wide_to_utf16(&wide).unwrap(), units);
    }

    #[test]
    fn utf8_wide_round_trip() {
        let bytes = "Aあ😀".as_bytes();
        let wide = utf8_to_wide(bytes).unwrap();
        assert_eq!(wide_to_utf8(&wide).unwrap(), bytes);
    }

    #[test]
    fn lone_surrogate_rejected_before_widening() {
        assert_eq!(
            utf16_to_wide(&[0xD800]),
            Err(Error::MalformedUtf16(Utf16Error::LoneHighSurrogate { unit: 0xD800, offset: 0 }))
        );
    }

    #[test]
    fn utf8_code_page_round_trip() {
        let bytes = "Hello, ñ€😀".as_bytes();
        let wide = Utf8CodePage.narrow_to_wide(bytes).unwrap();
        assert_eq!(Utf8CodePage.wide_to_narrow(&wide).unwrap(), bytes);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(utf8_to_wide(&[]).unwrap(), Vec::<WideUnit>::new());
        assert_eq!(wide_to_utf8(&[]).unwrap(), Vec::<u8>::new());
    }
}
