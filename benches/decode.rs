//! Benchmark: decode synthesized messages under both UTF-8 policies.
//! Compares pure-ASCII strings, dense multibyte strings, and invalid bytes
//! handled leniently, plus the non-string field path for a baseline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use protowire::encode::{write_string_field, write_varint_field};
use protowire::{Codec, DecodeMode, FieldType, Schema};

fn schema() -> Schema {
    Schema::new()
        .field(1, FieldType::String)
        .field(2, FieldType::Varint)
        .field(3, FieldType::Bytes)
}

fn ascii_message() -> Vec<u8> {
    let mut buf = Vec::new();
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(64);
    write_string_field(&mut buf, 1, &text);
    write_varint_field(&mut buf, 2, 123456789);
    buf
}

fn multibyte_message() -> Vec<u8> {
    let mut buf = Vec::new();
    let text = "caf\u{e9} \u{20ac}5 \u{65e5}\u{672c}\u{8a9e} \u{10348} ".repeat(64);
    write_string_field(&mut buf, 1, &text);
    buf
}

fn invalid_message() -> Vec<u8> {
    // Alternating valid ASCII and invalid runs, written as a raw string field.
    let mut payload = Vec::new();
    for _ in 0..256 {
        payload.extend_from_slice(b"abcdef");
        payload.extend_from_slice(&[0x80, 0xe2, 0x82, 0xc0]);
    }
    let mut buf = Vec::new();
    buf.push(0x0a); // field 1, length-delimited
    protowire::encode::write_varint(&mut buf, payload.len() as u64);
    buf.extend_from_slice(&payload);
    buf
}

fn bench_decode(c: &mut Criterion) {
    let schema = schema();
    let strict = Codec::new(schema.clone(), DecodeMode::Strict);
    let lenient = Codec::new(schema, DecodeMode::Lenient);

    let ascii = ascii_message();
    let multibyte = multibyte_message();
    let invalid = invalid_message();

    c.bench_function("decode_ascii_strict", |b| {
        b.iter(|| strict.decode_message(black_box(&ascii)).unwrap())
    });
    c.bench_function("decode_ascii_lenient", |b| {
        b.iter(|| lenient.decode_message(black_box(&ascii)).unwrap())
    });
    c.bench_function("decode_multibyte_strict", |b| {
        b.iter(|| strict.decode_message(black_box(&multibyte)).unwrap())
    });
    c.bench_function("decode_invalid_lenient", |b| {
        b.iter(|| lenient.decode_message(black_box(&invalid)).unwrap())
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
