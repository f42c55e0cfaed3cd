//! Typed failures for wire-format decoding.

/// Errors raised while decoding a wire-format message.
///
/// Every variant is terminal for the enclosing decode call: the caller gets a
/// complete message or one of these, never a partial message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer ended in the middle of a wire structure.
    #[error("input truncated mid-structure")]
    Truncated,
    /// A varint ran past the 10-byte limit without terminating.
    #[error("varint exceeds 10 bytes")]
    VarintTooLong,
    /// A tag carried a wire-type code other than 0, 1, 2 or 5.
    #[error("unknown wire type code {0}")]
    InvalidWireType(u8),
    /// A tag carried field number 0, which the wire format reserves.
    #[error("field number 0 is invalid")]
    InvalidFieldNumber,
    /// A length-delimited field declared more bytes than the buffer holds.
    #[error("declared length {declared} exceeds {remaining} remaining bytes")]
    LengthOverflow { declared: u64, remaining: usize },
    /// Strict mode only: a string payload held an invalid UTF-8 sequence.
    /// The offset is relative to the start of the string payload.
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8 { offset: usize },
}
