//! # protowire — wire-format decoder with selectable UTF-8 policy
//!
//! Decodes protobuf-style tag-length-value messages into field/value maps.
//! String fields are validated by an explicit UTF-8 state machine under one of
//! two policies:
//!
//! - [`DecodeMode::Strict`]: the first invalid byte sequence fails the whole
//!   decode, reporting the offset where the invalid run begins.
//! - [`DecodeMode::Lenient`]: each maximal invalid subsequence becomes one
//!   U+FFFD replacement character (the Unicode "maximal subpart" algorithm)
//!   and decoding continues; lenient string decoding never fails.
//!
//! The policy is an explicit parameter on every decode, never ambient state.
//!
//! ## Wire format
//!
//! A message is a concatenation of `(tag, value)` pairs. The tag is a varint
//! `(field_number << 3) | wire_type`; wire types are `0` varint, `1` fixed64,
//! `2` length-delimited (varint length plus raw bytes), `5` fixed32. Which
//! length-delimited fields are strings comes from a caller-supplied [`Schema`].
//!
//! ## Usage
//!
//! ```
//! use protowire::{Codec, DecodeMode, FieldType, Schema};
//!
//! let schema = Schema::new().field(1, FieldType::String);
//! let codec = Codec::new(schema, DecodeMode::Lenient);
//!
//! // Field 1, length 4: three invalid bytes, then 'A'.
//! let decoded = codec.decode_message(&[0x0a, 0x04, 0x80, 0xfe, 0xff, 0x41]).unwrap();
//! assert_eq!(decoded[&1].as_str(), Some("\u{fffd}\u{fffd}\u{fffd}A"));
//! ```

pub mod codec;
pub mod cursor;
pub mod encode;
pub mod error;
pub mod schema;
pub mod utf8;
pub mod value;
pub mod wire;

pub use codec::{decode, Codec};
pub use cursor::ByteCursor;
pub use error::DecodeError;
pub use schema::{FieldType, Schema};
pub use utf8::{decode_utf8, DecodeMode};
pub use value::Value;
pub use wire::{read_tag, read_varint, Tag, WireType};
