//! UTF-8 validation and decoding of string payloads.
//!
//! The scanner walks the well-formed byte ranges of the Unicode Standard
//! (table 3-7) one maximal subsequence at a time, implementing the "maximal
//! subpart" replacement algorithm for the lenient policy. It is written out as
//! an explicit scan rather than delegating to a lossy library conversion:
//! strict mode needs the byte offset of the first invalid run, and both
//! policies must share one code path so their accept/reject boundaries cannot
//! drift apart.

use crate::error::DecodeError;

/// UTF-8 validation policy for string fields.
///
/// Supplied once per decode call and threaded through to every string payload;
/// there is no ambient or global mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Fail the whole decode at the first invalid byte sequence.
    Strict,
    /// Replace each maximal invalid subsequence with U+FFFD and continue.
    /// String decoding never fails in this mode.
    Lenient,
}

/// Outcome of scanning one sequence at a non-ASCII position.
enum Scan {
    Valid { ch: char, len: usize },
    /// Length of the maximal invalid subsequence, at least 1.
    Invalid { len: usize },
}

/// Continuation requirements for a multi-byte lead: how many continuation
/// bytes follow, and the allowed range of the first one. The first-byte
/// ranges fold in the overlong, surrogate, and max-code-point exclusions;
/// `None` marks bytes that can never lead a sequence (0x80-0xbf in lead
/// position, 0xc0, 0xc1, 0xf5-0xff).
fn classify_lead(lead: u8) -> Option<(usize, u8, u8)> {
    match lead {
        0xc2..=0xdf => Some((1, 0x80, 0xbf)),
        0xe0 => Some((2, 0xa0, 0xbf)), // below 0xa0 would be overlong
        0xe1..=0xec | 0xee..=0xef => Some((2, 0x80, 0xbf)),
        0xed => Some((2, 0x80, 0x9f)), // 0xa0 and up would be UTF-16 surrogates
        0xf0 => Some((3, 0x90, 0xbf)), // below 0x90 would be overlong
        0xf1..=0xf3 => Some((3, 0x80, 0xbf)),
        0xf4 => Some((3, 0x80, 0x8f)), // 0x90 and up would pass U+10FFFF
        _ => None,
    }
}

/// Decode `bytes` as UTF-8 under `mode`.
///
/// Strict mode fails with [`DecodeError::InvalidUtf8`] carrying the offset of
/// the first invalid run, relative to `bytes`. Lenient mode always succeeds,
/// emitting exactly one U+FFFD per maximal invalid subsequence.
pub fn decode_utf8(bytes: &[u8], mode: DecodeMode) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        let lead = bytes[pos];
        if lead < 0x80 {
            out.push(lead as char);
            pos += 1;
            continue;
        }
        match scan_sequence(bytes, pos) {
            Scan::Valid { ch, len } => {
                out.push(ch);
                pos += len;
            }
            Scan::Invalid { len } => match mode {
                DecodeMode::Strict => return Err(DecodeError::InvalidUtf8 { offset: pos }),
                DecodeMode::Lenient => {
                    out.push(char::REPLACEMENT_CHARACTER);
                    pos += len;
                }
            },
        }
    }
    Ok(out)
}

/// Scan one sequence starting at a non-ASCII byte.
///
/// An invalid run is the lead byte plus every following byte that continued a
/// still-possible sequence; it stops before the first byte that cannot extend
/// the prefix, so that byte gets evaluated on its own. A lead that can never
/// start a sequence is a run of exactly 1.
fn scan_sequence(bytes: &[u8], pos: usize) -> Scan {
    let lead = bytes[pos];
    let Some((tail_len, first_lo, first_hi)) = classify_lead(lead) else {
        return Scan::Invalid { len: 1 };
    };

    let mut taken = 0;
    while taken < tail_len {
        let Some(&byte) = bytes.get(pos + 1 + taken) else {
            break;
        };
        let (lo, hi) = if taken == 0 { (first_lo, first_hi) } else { (0x80, 0xbf) };
        if byte < lo || byte > hi {
            break;
        }
        taken += 1;
    }
    if taken < tail_len {
        // Truncated or interrupted: lead plus the continuations seen so far
        // form one maximal invalid subsequence.
        return Scan::Invalid { len: 1 + taken };
    }

    let mut cp = u32::from(lead & (0x7f >> (tail_len + 1)));
    for i in 0..tail_len {
        cp = (cp << 6) | u32::from(bytes[pos + 1 + i] & 0x3f);
    }
    // The range checks above exclude surrogates and values past U+10FFFF, so
    // the code point is always a valid scalar here.
    match char::from_u32(cp) {
        Some(ch) => Scan::Valid { ch, len: 1 + tail_len },
        None => Scan::Invalid { len: 1 + tail_len },
    }
}
