//! Percent-decoding for parameter values and query pairs.
//!
//! Literal pattern segments are never decoded; only captured values are.

use percent_encoding::percent_decode_str;

/// Percent-decode a URL component.
///
/// All or nothing: if any `%` is not followed by two hex digits, or the
/// decoded bytes are not valid UTF-8, the raw text is returned unchanged.
/// `+` is left alone.
pub fn decode_component(raw: &str) -> String {
    if !has_valid_escapes(raw) {
        return raw.to_string();
    }
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// True if every `%` starts a two-hex-digit escape.
fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !matches!(escape, Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
