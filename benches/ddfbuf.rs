use InputRecord::*;
use ddfbuf::{ByteBuffer, FIELD_TERMINATOR, UNIT_TERMINATOR};
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

include!("common.rs");

/// Record length, interchange level and base address, read through the cursor.
fn read_leader(record: &mut ByteBuffer) -> (i64, u8, i64) {
    let len = record.decode_integer(5).unwrap_or_default();
    let level = record.read_byte().unwrap_or_default();
    let _ = record.skip(6);
    let base = record.decode_integer(5).unwrap_or_default();
    (len, level, base)
}

#[library_benchmark]
#[bench::ddr(Ddr)]
#[bench::data_record(DataRecord)]
fn leader(input: InputRecord) -> (i64, u8, i64) {
    let mut record = ByteBuffer::from(black_box(input.data()));
    assert!(record.is_valid_header());
    black_box(read_leader(&mut record))
}

#[library_benchmark]
#[bench::data_record(DataRecord)]
#[bench::unterminated(Literal(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"))]
fn subfields(input: InputRecord) -> usize {
    let mut field = ByteBuffer::from(black_box(input.data()));
    let mut count = 0;
    while !field.is_empty() {
        let (consumed, text) =
            field.fetch_string(field.len() + 1, UNIT_TERMINATOR, FIELD_TERMINATOR);
        _ = black_box(text);
        count += 1;
        field = ByteBuffer::from(field.bytes_from(consumed.max(1)));
    }
    count
}

#[library_benchmark]
#[bench::short("0042")]
#[bench::long("000000000000123456789")]
fn integer(field: &'static str) -> i64 {
    ByteBuffer::from(black_box(field))
        .decode_integer_at(0, field.len())
        .unwrap_or_default()
}

library_benchmark_group!(
    name = decode_records;
    compare_by_id = true;
    benchmarks = leader, subfields, integer
);
main!(library_benchmark_groups = decode_records);
