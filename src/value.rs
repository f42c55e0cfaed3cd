//! Runtime values produced by the decoder.

/// A single decoded field value.
///
/// Values are owned: string and bytes payloads are copied out of the input
/// buffer, so the buffer can be freed or reused once decode returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Varint(u64),
    Fixed32(u32),
    Fixed64(u64),
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Varint(x) => Some(*x),
            Value::Fixed32(x) => Some(u64::from(*x)),
            Value::Fixed64(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}
