//! Bounds-checked forward-only reader over an immutable byte buffer.

use crate::error::DecodeError;

/// A forward-only cursor over a byte slice.
///
/// Every read checks bounds before committing: on failure the position is
/// left where it was and the caller sees a typed [`DecodeError::Truncated`],
/// never a panic. A cursor is created per decode call and discarded with it.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, pos: 0 }
    }

    /// The byte at the current position, without advancing.
    pub fn peek(&self) -> Result<u8, DecodeError> {
        self.data.get(self.pos).copied().ok_or(DecodeError::Truncated)
    }

    /// Read one byte and advance past it.
    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let byte = self.peek()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read exactly `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos.checked_add(n).ok_or(DecodeError::Truncated)?;
        if end > self.data.len() {
            return Err(DecodeError::Truncated);
        }
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Skip `n` bytes without inspecting them.
    pub fn advance(&mut self, n: usize) -> Result<(), DecodeError> {
        self.read_bytes(n).map(|_| ())
    }

    /// Bytes left between the current position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True once the cursor has consumed the whole buffer.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }
}
