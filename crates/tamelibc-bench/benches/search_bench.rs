//! Substring-search microbenchmarks.
//!
//! Measures forward and last-occurrence search over synthetic haystacks:
//! needle at the back, needle absent, and overlap-heavy input where every
//! third byte starts another candidate match.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tamelibc_core::string::{strpos, strrpos};

const NEEDLE: &[u8] = b"3?i\0";

fn filler_haystack(len: usize, tail: &[u8]) -> Vec<u8> {
    let mut hay = Vec::with_capacity(len + tail.len() + 1);
    while hay.len() < len {
        hay.extend_from_slice(b"abcdefgh");
    }
    hay.truncate(len);
    hay.extend_from_slice(tail);
    hay.push(0);
    hay
}

fn overlapping_haystack(len: usize) -> Vec<u8> {
    let mut hay = Vec::with_capacity(len + 1);
    while hay.len() < len {
        hay.extend_from_slice(b"3?i");
    }
    hay.truncate(len);
    hay.push(0);
    hay
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("substring_search");

    for &size in &[256usize, 4096, 65536] {
        let at_back = filler_haystack(size, b"3?i");
        let absent = filler_haystack(size, b"");
        let overlapping = overlapping_haystack(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("strpos_back", size), &at_back, |b, hay| {
            b.iter(|| strpos(black_box(hay), black_box(NEEDLE)));
        });
        group.bench_with_input(BenchmarkId::new("strpos_absent", size), &absent, |b, hay| {
            b.iter(|| strpos(black_box(hay), black_box(NEEDLE)));
        });
        group.bench_with_input(
            BenchmarkId::new("strrpos_overlapping", size),
            &overlapping,
            |b, hay| {
                b.iter(|| strrpos(black_box(hay), black_box(NEEDLE)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
