//! Payload to symbol sequence.
//!
//! The data cells of a symbol are driven by a short character sequence
//! derived from the payload. The sequence is the standard base64 encoding
//! of the payload's UTF-8 bytes, cut off after [ENCODED_LEN] characters.
use arrayvec::ArrayString;
use base64::{engine::general_purpose::STANDARD, Engine};

/// Maximal length of an encoded sequence.
pub const ENCODED_LEN: usize = 25;

// Every 3 input bytes become 4 output characters, so the first
// ENCODED_LEN characters only depend on this many leading bytes.
const BYTES_NEEDED: usize = ENCODED_LEN.div_ceil(4) * 3;

/// Encoded form of a payload, at most [ENCODED_LEN] ASCII characters.
pub type EncodedSequence = ArrayString<ENCODED_LEN>;

/// Derive the encoded sequence for `data`.
///
/// The result is shorter than [ENCODED_LEN] for payloads of at most
/// 18 bytes, and empty only for the empty payload.
pub fn encode(data: &str) -> EncodedSequence {
    let bytes = data.as_bytes();
    let head = &bytes[..bytes.len().min(BYTES_NEEDED)];
    let full = STANDARD.encode(head);

    let mut out = EncodedSequence::new();
    // base64 output is ASCII, byte slicing is safe
    out.push_str(&full[..full.len().min(ENCODED_LEN)]);
    out
}
