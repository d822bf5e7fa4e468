//! UTF-8 to wide-string conversion.
//!
//! The platform text stacks the client talks to (font rendering, IME, the
//! Windows API) consume wide strings, so code units are 16 bits on Windows
//! and 32 bits everywhere else. Conversion failure is non-fatal by contract:
//! the strict functions return an [`EncodingError`] and the `_or_sentinel`
//! wrappers substitute a fixed human-readable placeholder, which is what the
//! legacy callers expect to see in place of a broken string.

use thiserror::Error;

/// A platform-width wide code unit: UTF-16 on Windows, UTF-32 elsewhere.
#[cfg(windows)]
pub type WideChar = u16;

/// A platform-width wide code unit: UTF-16 on Windows, UTF-32 elsewhere.
#[cfg(not(windows))]
pub type WideChar = u32;

/// Error when converting between UTF-8 and wide strings.
///
/// The display text of each variant is the historical placeholder string
/// that callers printed in place of the unconvertible value; keeping it as
/// the error payload keeps existing logs and UI fallbacks stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The source bytes are not valid UTF-8
    #[error("<invalid UTF-8 string>")]
    InvalidUtf8,
    /// The source wide string contains an invalid code unit sequence
    #[error("<invalid wstring>")]
    InvalidWide,
}

/// Converts a UTF-8 byte string to a wide string.
///
/// # Examples
///
/// ```
/// use voxl_util::{utf8_to_wide, wide_to_utf8};
///
/// let wide = utf8_to_wide("grüße".as_bytes()).expect("valid UTF-8");
/// assert_eq!(wide_to_utf8(&wide).as_deref(), Ok("grüße"));
/// ```
pub fn utf8_to_wide(input: &[u8]) -> Result<Vec<WideChar>, EncodingError> {
    let text = std::str::from_utf8(input).map_err(|_| EncodingError::InvalidUtf8)?;
    Ok(wide_from_str(text))
}

/// Encodes known-good UTF-8 text as a wide string. Infallible.
#[cfg(windows)]
pub fn wide_from_str(text: &str) -> Vec<WideChar> {
    text.encode_utf16().collect()
}

/// Encodes known-good UTF-8 text as a wide string. Infallible.
#[cfg(not(windows))]
pub fn wide_from_str(text: &str) -> Vec<WideChar> {
    text.chars().map(|c| c as u32).collect()
}

/// Converts a wide string back to UTF-8.
///
/// Fails on unpaired surrogates (Windows) or code units that are not Unicode
/// scalar values (elsewhere).
#[cfg(windows)]
pub fn wide_to_utf8(input: &[WideChar]) -> Result<String, EncodingError> {
    String::from_utf16(input).map_err(|_| EncodingError::InvalidWide)
}

/// Converts a wide string back to UTF-8.
///
/// Fails on unpaired surrogates (Windows) or code units that are not Unicode
/// scalar values (elsewhere).
#[cfg(not(windows))]
pub fn wide_to_utf8(input: &[WideChar]) -> Result<String, EncodingError> {
    input
        .iter()
        .map(|&unit| char::from_u32(unit).ok_or(EncodingError::InvalidWide))
        .collect()
}

/// Like [`utf8_to_wide`], but substitutes the `<invalid UTF-8 string>`
/// placeholder instead of failing, logging a hex dump of the input.
pub fn utf8_to_wide_or_sentinel(input: &[u8]) -> Vec<WideChar> {
    match utf8_to_wide(input) {
        Ok(wide) => wide,
        Err(err) => {
            tracing::info!(
                "Couldn't convert UTF-8 string 0x{} into a wide string",
                hex::encode(input)
            );
            wide_from_str(&err.to_string())
        }
    }
}

/// Like [`wide_to_utf8`], but substitutes the `<invalid wstring>`
/// placeholder instead of failing, logging a hex dump of the input.
pub fn wide_to_utf8_or_sentinel(input: &[WideChar]) -> String {
    match wide_to_utf8(input) {
        Ok(text) => text,
        Err(err) => {
            let bytes: Vec<u8> = input.iter().flat_map(|unit| unit.to_le_bytes()).collect();
            tracing::info!(
                "Couldn't convert wide string 0x{} into UTF-8",
                hex::encode(bytes)
            );
            err.to_string()
        }
    }
}
