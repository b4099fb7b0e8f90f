//! Benchmark – `exactjson` parsing and encoding against `serde_json`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use exactjson::{AsciiOnly, EscapePolicy, Minimal, Object, UnicodeEscapes, parse_object};

/// A deterministic document of roughly `records` small objects, mixing
/// strings that need escaping, exact decimals and nesting.
fn make_payload(records: usize) -> String {
    let mut root = Object::new();
    let mut items = exactjson::Array::new();
    for i in 0..records {
        let mut item = Object::new();
        item.set_int("id", i);
        item.set_string("name", format!("item \"{i}\"\té"));
        item.set_number("price", format!("{i}.{:02}", i % 100).parse().expect("valid number"));
        item.set_bool("active", i % 3 == 0);
        item.set_null("note");
        items.add_object(item);
    }
    root.set_array("items", items);
    root.to_json()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &records in &[10usize, 1_000] {
        let payload = make_payload(records);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("exactjson", records), &payload, |b, p| {
            b.iter(|| black_box(parse_object(black_box(p)).expect("valid payload")));
        });
        group.bench_with_input(BenchmarkId::new("serde_json", records), &payload, |b, p| {
            b.iter(|| {
                black_box(
                    serde_json::from_str::<serde_json::Value>(black_box(p))
                        .expect("valid payload"),
                )
            });
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let object = parse_object(&make_payload(1_000)).expect("valid payload");
    let policies: [(&str, &dyn EscapePolicy); 3] = [
        ("minimal", &Minimal),
        ("ascii_only", &AsciiOnly),
        ("unicode_escapes", &UnicodeEscapes),
    ];

    let mut group = c.benchmark_group("encode");
    for (name, policy) in policies {
        group.bench_with_input(BenchmarkId::from_parameter(name), &policy, |b, &p| {
            b.iter(|| black_box(object.to_json_with(p)));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_parse, bench_encode }
criterion_main!(benches);
