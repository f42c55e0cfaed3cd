//! Decode fuzz target: feed arbitrary bytes to the message decoder in both
//! modes. The decoder must not panic; lenient string decoding must be total.
//! Build with: cargo fuzz run decode_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    use protowire::{decode, decode_utf8, DecodeMode, FieldType, Schema};

    let schema = Schema::new()
        .field(1, FieldType::String)
        .field(2, FieldType::Varint)
        .field(3, FieldType::Bytes)
        .field(4, FieldType::Fixed32)
        .field(5, FieldType::Fixed64);

    let _ = decode(data, DecodeMode::Strict, &schema);
    let _ = decode(data, DecodeMode::Lenient, &schema);

    // The scanner on its own is total in lenient mode.
    let _ = decode_utf8(data, DecodeMode::Lenient).expect("lenient decode is total");
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run decode_fuzz");
}
