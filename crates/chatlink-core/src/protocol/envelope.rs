//! Text envelope: `"[&" + base64(bytes) + "]"`.
//!
//! Decoding trims any leading/trailing `[`, `]`, `&` rather than requiring
//! them, so bare Base64 is accepted too.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;

use crate::error::{ChatLinkError, Result};

/// Opening marker of a rendered chat link.
pub const OPEN: &str = "[&";
/// Closing marker of a rendered chat link.
pub const CLOSE: char = ']';

/// Strip the envelope and Base64-decode the remainder.
pub fn to_bytes(text: &str) -> Result<Bytes> {
    let inner = text.trim_matches(|c| matches!(c, '[' | ']' | '&'));
    let raw = STANDARD
        .decode(inner)
        .map_err(|e| ChatLinkError::Format(format!("invalid base64: {e}")))?;
    Ok(Bytes::from(raw))
}

/// Base64-encode and wrap in the envelope.
pub fn to_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(OPEN.len() + bytes.len().div_ceil(3) * 4 + 1);
    out.push_str(OPEN);
    STANDARD.encode_string(bytes, &mut out);
    out.push(CLOSE);
    out
}
