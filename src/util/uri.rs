//! URI helpers for the post-login redirect.
//!
//! The `return_to` parameter is read the way a browser's `URLSearchParams`
//! reads it (lenient form-url decoding), then decoded a second time with
//! `decodeURI` rules: escapes of reserved characters survive, and malformed
//! escapes or invalid UTF-8 are rejected.

#[cfg(test)]
#[path = "uri_test.rs"]
mod uri_test;

use url::Url;

use crate::error::ClientError;

/// Characters whose escapes `decodeURI` leaves encoded.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// First value of query parameter `name` in an absolute `href`.
///
/// Returns `None` if `href` does not parse or the parameter is absent.
pub fn query_param(href: &str, name: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs().find(|(key, _)| key == name).map(|(_, value)| value.into_owned())
}

/// Decode percent escapes with `decodeURI` semantics.
///
/// # Errors
///
/// Returns [`ClientError::MalformedUri`] for a `%` not followed by two hex
/// digits, or for escaped bytes that do not form valid UTF-8.
pub fn decode_uri(input: &str) -> Result<String, ClientError> {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            let next = input[i..].find('%').map_or(bytes.len(), |off| i + off);
            out.push_str(&input[i..next]);
            i = next;
            continue;
        }

        let lead = escaped_byte(input, i)?;
        if lead < 0x80 {
            if RESERVED.contains(&lead) {
                out.push_str(&input[i..i + 3]);
            } else {
                out.push(char::from(lead));
            }
            i += 3;
            continue;
        }

        let width = utf8_width(lead).ok_or_else(|| malformed(input, "invalid UTF-8 lead byte"))?;
        let mut buf = [0u8; 4];
        buf[0] = lead;
        for slot in buf.iter_mut().take(width).skip(1) {
            i += 3;
            *slot = escaped_byte(input, i)?;
        }
        i += 3;

        let decoded = std::str::from_utf8(&buf[..width]).map_err(|_| malformed(input, "invalid UTF-8 sequence"))?;
        out.push_str(decoded);
    }

    Ok(out)
}

fn escaped_byte(input: &str, at: usize) -> Result<u8, ClientError> {
    let bytes = input.as_bytes();
    if bytes.get(at) != Some(&b'%') {
        return Err(malformed(input, "truncated UTF-8 sequence"));
    }
    let hi = bytes.get(at + 1).copied().and_then(hex_value);
    let lo = bytes.get(at + 2).copied().and_then(hex_value);
    match (hi, lo) {
        (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
        _ => Err(malformed(input, "incomplete percent escape")),
    }
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

fn malformed(input: &str, reason: &'static str) -> ClientError {
    ClientError::MalformedUri { input: input.to_owned(), reason }
}
