//! Decode wire-format messages into field-number/value maps.
//!
//! The codec drives the field loop: read a tag, consume the payload per wire
//! type, interpret it per the schema, and fold it into the result map with
//! last-value-wins scalar semantics.

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::schema::{FieldType, Schema};
use crate::utf8::{decode_utf8, DecodeMode};
use crate::value::Value;
use crate::wire::{read_tag, read_varint, WireType};
use byteorder::{ByteOrder, LittleEndian};
use std::collections::HashMap;

/// A wire-format decoder bound to a schema and a UTF-8 policy.
///
/// The codec holds no per-call state; each `decode_message` builds its own
/// cursor, so one codec can serve decodes on multiple threads at once.
#[derive(Debug, Clone)]
pub struct Codec {
    schema: Schema,
    mode: DecodeMode,
}

impl Codec {
    pub fn new(schema: Schema, mode: DecodeMode) -> Self {
        Codec { schema, mode }
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Decode a complete message from `bytes`.
    ///
    /// Returns the full field map or the first error encountered; a failing
    /// decode never yields a partial message. Repeated scalar fields keep
    /// their last occurrence; unknown field numbers are consumed and dropped.
    pub fn decode_message(&self, bytes: &[u8]) -> Result<HashMap<u32, Value>, DecodeError> {
        let mut cursor = ByteCursor::new(bytes);
        let mut out = HashMap::new();
        while !cursor.is_empty() {
            let tag = read_tag(&mut cursor)?;
            let field_type = self.schema.lookup(tag.field_number);
            if let Some(value) = self.decode_field(&mut cursor, tag.wire_type, field_type)? {
                out.insert(tag.field_number, value);
            }
        }
        Ok(out)
    }

    /// Consume one field payload.
    ///
    /// Consumption is dictated by the wire type alone, so unknown fields and
    /// schema/wire mismatches still advance the cursor correctly; those cases
    /// return `None` and the payload is dropped.
    fn decode_field(
        &self,
        cursor: &mut ByteCursor,
        wire_type: WireType,
        field_type: Option<FieldType>,
    ) -> Result<Option<Value>, DecodeError> {
        match wire_type {
            WireType::Varint => {
                let v = read_varint(cursor)?;
                Ok(matches!(field_type, Some(FieldType::Varint)).then(|| Value::Varint(v)))
            }
            WireType::Fixed32 => {
                let v = LittleEndian::read_u32(cursor.read_bytes(4)?);
                Ok(matches!(field_type, Some(FieldType::Fixed32)).then(|| Value::Fixed32(v)))
            }
            WireType::Fixed64 => {
                let v = LittleEndian::read_u64(cursor.read_bytes(8)?);
                Ok(matches!(field_type, Some(FieldType::Fixed64)).then(|| Value::Fixed64(v)))
            }
            WireType::LengthDelimited => {
                let declared = read_varint(cursor)?;
                if declared > cursor.remaining() as u64 {
                    return Err(DecodeError::LengthOverflow {
                        declared,
                        remaining: cursor.remaining(),
                    });
                }
                let payload = cursor.read_bytes(declared as usize)?;
                match field_type {
                    Some(FieldType::String) => {
                        Ok(Some(Value::String(decode_utf8(payload, self.mode)?)))
                    }
                    Some(FieldType::Bytes) => Ok(Some(Value::Bytes(payload.to_vec()))),
                    _ => Ok(None),
                }
            }
        }
    }
}

/// One-shot decode with an explicit mode, for callers that do not keep a
/// codec around.
pub fn decode(
    bytes: &[u8],
    mode: DecodeMode,
    schema: &Schema,
) -> Result<HashMap<u32, Value>, DecodeError> {
    Codec::new(schema.clone(), mode).decode_message(bytes)
}
