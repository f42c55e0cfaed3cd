//! Minimal writers for the wire format.
//!
//! String writers take `&str`, so the write path emits well-formed UTF-8 by
//! construction and needs no validation.

use crate::wire::WireType;
use byteorder::{ByteOrder, LittleEndian};

/// Append an unsigned base-128 varint, least-significant group first.
pub fn write_varint(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let group = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(group);
            return;
        }
        out.push(group | 0x80);
    }
}

/// Append a field tag.
pub fn write_tag(out: &mut Vec<u8>, field_number: u32, wire_type: WireType) {
    write_varint(out, (u64::from(field_number) << 3) | u64::from(wire_type.code()));
}

pub fn write_varint_field(out: &mut Vec<u8>, field_number: u32, value: u64) {
    write_tag(out, field_number, WireType::Varint);
    write_varint(out, value);
}

pub fn write_fixed32_field(out: &mut Vec<u8>, field_number: u32, value: u32) {
    write_tag(out, field_number, WireType::Fixed32);
    let mut buf = [0u8; 4];
    LittleEndian::write_u32(&mut buf, value);
    out.extend_from_slice(&buf);
}

pub fn write_fixed64_field(out: &mut Vec<u8>, field_number: u32, value: u64) {
    write_tag(out, field_number, WireType::Fixed64);
    let mut buf = [0u8; 8];
    LittleEndian::write_u64(&mut buf, value);
    out.extend_from_slice(&buf);
}

pub fn write_string_field(out: &mut Vec<u8>, field_number: u32, value: &str) {
    write_length_delimited(out, field_number, value.as_bytes());
}

pub fn write_bytes_field(out: &mut Vec<u8>, field_number: u32, value: &[u8]) {
    write_length_delimited(out, field_number, value);
}

fn write_length_delimited(out: &mut Vec<u8>, field_number: u32, payload: &[u8]) {
    write_tag(out, field_number, WireType::LengthDelimited);
    write_varint(out, payload.len() as u64);
    out.extend_from_slice(payload);
}
