//! Wire-level structure: varints, wire types, and field tags.

use crate::cursor::ByteCursor;
use crate::error::DecodeError;

/// Longest legal varint: ten 7-bit groups cover a u64 with one bit to spare.
const MAX_VARINT_BYTES: usize = 10;

/// The four wire types the decoder understands. Codes 3 and 4 (the retired
/// group markers) and 6/7 (unassigned) are rejected as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint,
    Fixed64,
    LengthDelimited,
    Fixed32,
}

impl WireType {
    /// Map the 3-bit tag code to a wire type.
    pub fn from_code(code: u8) -> Result<WireType, DecodeError> {
        match code {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            5 => Ok(WireType::Fixed32),
            other => Err(DecodeError::InvalidWireType(other)),
        }
    }

    /// The 3-bit code carried in a tag.
    pub fn code(self) -> u8 {
        match self {
            WireType::Varint => 0,
            WireType::Fixed64 => 1,
            WireType::LengthDelimited => 2,
            WireType::Fixed32 => 5,
        }
    }
}

/// A decoded field tag: the varint `(field_number << 3) | wire_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub field_number: u32,
    pub wire_type: WireType,
}

/// Decode an unsigned base-128 varint, least-significant group first.
///
/// Consumes at most 10 bytes; fails with [`DecodeError::VarintTooLong`] if the
/// tenth byte still has its continuation bit set, and with
/// [`DecodeError::Truncated`] if the buffer ends before a terminating byte.
pub fn read_varint(cursor: &mut ByteCursor) -> Result<u64, DecodeError> {
    let mut value = 0u64;
    for group in 0..MAX_VARINT_BYTES {
        let byte = cursor.read_byte()?;
        value |= u64::from(byte & 0x7f) << (7 * group);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(DecodeError::VarintTooLong)
}

/// Decode one tag and split it into field number and wire type.
pub fn read_tag(cursor: &mut ByteCursor) -> Result<Tag, DecodeError> {
    let raw = read_varint(cursor)?;
    let wire_type = WireType::from_code((raw & 0x7) as u8)?;
    // Field 0 is reserved, and nothing above the 29-bit field-number space is
    // addressable either; both arrive here as an unusable number.
    let field_number =
        u32::try_from(raw >> 3).map_err(|_| DecodeError::InvalidFieldNumber)?;
    if field_number == 0 {
        return Err(DecodeError::InvalidFieldNumber);
    }
    Ok(Tag { field_number, wire_type })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn varint(bytes: &[u8]) -> Result<u64, DecodeError> {
        read_varint(&mut ByteCursor::new(bytes))
    }

    #[test]
    fn varint_single_and_multi_byte() {
        assert_eq!(varint(&[0x00]).unwrap(), 0);
        assert_eq!(varint(&[0x7f]).unwrap(), 127);
        assert_eq!(varint(&[0x80, 0x01]).unwrap(), 128);
        assert_eq!(varint(&[0xac, 0x02]).unwrap(), 300);
        assert_eq!(
            varint(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn varint_trailing_bytes_left_alone() {
        let mut cursor = ByteCursor::new(&[0x05, 0xaa]);
        assert_eq!(read_varint(&mut cursor).unwrap(), 5);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn varint_truncated() {
        assert_eq!(varint(&[]), Err(DecodeError::Truncated));
        assert_eq!(varint(&[0x80]), Err(DecodeError::Truncated));
        assert_eq!(varint(&[0xff, 0xff]), Err(DecodeError::Truncated));
    }

    #[test]
    fn varint_too_long() {
        // Ten continuation bytes and no terminator.
        assert_eq!(varint(&[0xff; 10]), Err(DecodeError::VarintTooLong));
        assert_eq!(varint(&[0x80; 11]), Err(DecodeError::VarintTooLong));
    }

    #[test]
    fn tag_split() {
        // (1 << 3) | 2 = 0x0a: field 1, length-delimited.
        let tag = read_tag(&mut ByteCursor::new(&[0x0a])).unwrap();
        assert_eq!(tag.field_number, 1);
        assert_eq!(tag.wire_type, WireType::LengthDelimited);

        // (16 << 3) | 5 = 0x85 0x01: field 16, fixed32.
        let tag = read_tag(&mut ByteCursor::new(&[0x85, 0x01])).unwrap();
        assert_eq!(tag.field_number, 16);
        assert_eq!(tag.wire_type, WireType::Fixed32);
    }

    #[test]
    fn tag_rejects_unknown_wire_types() {
        for code in [3u8, 4, 6, 7] {
            let raw = (1 << 3) | code;
            assert_eq!(
                read_tag(&mut ByteCursor::new(&[raw])),
                Err(DecodeError::InvalidWireType(code))
            );
        }
    }

    #[test]
    fn tag_rejects_field_zero() {
        // (0 << 3) | 0 = 0x00.
        assert_eq!(
            read_tag(&mut ByteCursor::new(&[0x00])),
            Err(DecodeError::InvalidFieldNumber)
        );
    }
}
