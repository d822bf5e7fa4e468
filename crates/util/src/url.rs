//! URL percent-encoding and decoding (RFC 3986).

const URL_HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Unreserved characters per RFC 3986 section 2.3.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}

/// Percent-encodes arbitrary bytes as an ASCII string.
///
/// Unreserved characters pass through; every other byte becomes `%XX` with
/// uppercase hex digits.
///
/// # Examples
///
/// ```
/// use voxl_util::urlencode;
///
/// assert_eq!(urlencode(b"hello world"), "hello%20world");
/// assert_eq!(urlencode(b"a-b.c_d~e"), "a-b.c_d~e");
/// ```
pub fn urlencode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(URL_HEX_CHARS[(byte >> 4) as usize] as char);
            out.push(URL_HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
    }
    out
}

/// Inverse of [`urlencode`].
///
/// A `%` followed by two hex digits decodes to one byte; anything else,
/// including malformed or truncated escapes, passes through unchanged.
///
/// # Examples
///
/// ```
/// use voxl_util::urldecode;
///
/// assert_eq!(urldecode("hello%20world"), b"hello world");
/// assert_eq!(urldecode("100%"), b"100%");
/// ```
pub fn urldecode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}
