//! Byte-level UTF-8 helpers for input that may end mid-character.

/// Expected length of a UTF-8 sequence starting with `lead`, or `None` if
/// `lead` cannot start a sequence.
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Decode the first character of `bytes`.
///
/// Returns the character and the number of bytes it occupies. Invalid or
/// truncated sequences yield `(None, 1)` so the caller can step over them
/// one byte at a time. Empty input yields `(None, 0)`.
pub fn decode_char(bytes: &[u8]) -> (Option<char>, usize) {
    let Some(&lead) = bytes.first() else {
        return (None, 0);
    };
    let Some(len) = sequence_len(lead) else {
        return (None, 1);
    };
    if bytes.len() < len {
        return (None, 1);
    }
    match std::str::from_utf8(&bytes[..len]) {
        Ok(s) => (s.chars().next(), len),
        Err(_) => (None, 1),
    }
}

/// Number of trailing bytes of `bytes` that form the valid beginning of a
/// UTF-8 sequence still waiting for its continuation bytes.
///
/// Returns 0 when `bytes` ends on a complete character or on bytes that can
/// never become valid.
pub fn incomplete_tail(bytes: &[u8]) -> usize {
    // A sequence is at most 4 bytes, so the lead byte is within the last 3.
    let window = bytes.len().min(3);
    for back in 1..=window {
        let start = bytes.len() - back;
        let b = bytes[start];
        if is_continuation(b) {
            continue;
        }
        return match sequence_len(b) {
            Some(len) if len > back && valid_prefix(&bytes[start..]) => back,
            _ => 0,
        };
    }
    0
}

/// Whether `partial` (lead byte plus continuation bytes) can still be
/// completed into a valid character.
fn valid_prefix(partial: &[u8]) -> bool {
    let lead = partial[0];
    if !partial[1..].iter().all(|&b| is_continuation(b)) {
        return false;
    }
    // Reject overlong, surrogate and out-of-range second bytes early.
    match (lead, partial.get(1)) {
        (0xE0, Some(&b)) => b >= 0xA0,
        (0xED, Some(&b)) => b < 0xA0,
        (0xF0, Some(&b)) => b >= 0x90,
        (0xF4, Some(&b)) => b < 0x90,
        _ => true,
    }
}
