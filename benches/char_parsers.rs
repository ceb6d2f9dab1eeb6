//! Character parser throughput benchmarks.
//!
//! Each benchmark drives one parser repeatedly over a generated buffer, the
//! way a repetition combinator would, so the numbers reflect per-unit cost of
//! classification, negation and skipping.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use parsichar::config::Locale;
use parsichar::encoding::{EncodingExt, StandardWide};
use parsichar::{AtomicCursor, Cursor, Parser, SkipExt, ascii, iso8859_1, negate, unicode};

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

/// Consume units with `parser` until it fails, returning how many matched
fn run<'code, P, T>(parser: &P, input: &'code [T]) -> usize
where
    T: parsichar::Atomic,
    P: Parser<'code, Cursor = AtomicCursor<'code, T>>,
{
    let mut cursor = AtomicCursor::new(input);
    let mut count = 0;
    while let Ok((_, next)) = parser.parse(cursor) {
        cursor = next;
        count += 1;
    }
    count
}

fn narrow_input(len: usize) -> Vec<u8> {
    (0..len).map(|i| b'a' + (i % 26) as u8).collect()
}

fn bench_narrow(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrow");
    for size in SIZES {
        let input = narrow_input(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ascii_alpha", size), &input, |b, input| {
            b.iter(|| run(&ascii::alpha(), black_box(input.as_slice())));
        });
        group.bench_with_input(BenchmarkId::new("iso8859_1_alnum", size), &input, |b, input| {
            b.iter(|| run(&iso8859_1::alnum(), black_box(input.as_slice())));
        });
        group.bench_with_input(BenchmarkId::new("ascii_not_digit", size), &input, |b, input| {
            b.iter(|| run(&negate(ascii::digit()), black_box(input.as_slice())));
        });
        group.bench_with_input(BenchmarkId::new("ascii_char_set", size), &input, |b, input| {
            let set = ascii::char_set(b"a-z0-9_");
            b.iter(|| run(&set, black_box(input.as_slice())));
        });
    }
    group.finish();
}

fn bench_skipped(c: &mut Criterion) {
    let mut group = c.benchmark_group("skipped");
    for size in SIZES {
        let input: Vec<u8> = (0..size)
            .map(|i| if i % 4 == 3 { b'x' } else { b' ' })
            .collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("space_then_x", size), &input, |b, input| {
            let parser = ascii::is_char(b'x').skipped(ascii::space());
            b.iter(|| run(&parser, black_box(input.as_slice())));
        });
    }
    group.finish();
}

fn bench_wide(c: &mut Criterion) {
    let text: String = "héllo wörld ωmega ".repeat(64);
    let wide: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let code_points: Vec<u32> = wide.iter().map(|&c| u32::from(c)).collect();

    let mut group = c.benchmark_group("wide");
    group.throughput(Throughput::Elements(wide.len() as u64));

    group.bench_function("standard_wide_utf8_alpha", |b| {
        let parser = StandardWide::new(Locale::Utf8).alpha();
        b.iter(|| run(&parser, black_box(&wide[..])));
    });
    group.bench_function("unicode_alpha", |b| {
        b.iter(|| run(&unicode::alpha(), black_box(&code_points[..])));
    });
    group.bench_function("unicode_not_braille", |b| {
        b.iter(|| run(&negate(unicode::braille()), black_box(&code_points[..])));
    });
    group.finish();
}

fn bench_single_unit(c: &mut Criterion) {
    let input = [0x2800u32];
    c.bench_function("unicode_braille_single", |b| {
        b.iter(|| {
            let cursor = AtomicCursor::new(black_box(&input[..]));
            unicode::braille()
                .parse(cursor)
                .map(|(unit, next)| (unit, next.position()))
        });
    });
}

criterion_group!(
    benches,
    bench_narrow,
    bench_skipped,
    bench_wide,
    bench_single_unit
);
criterion_main!(benches);
