use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use fcompare::lcs;
use fcompare::lines::{NormalizeOptions, parse_lines};

/// Synthetic file: `lines` numbered lines, every `period`-th one
/// replaced so the two sides disagree at a fixed rate.
fn make_text(lines: usize, period: usize, marker: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(lines * 12);
    for n in 0..lines {
        if period > 0 && n % period == 0 {
            buf.extend_from_slice(format!("{} {}\n", marker, n).as_bytes());
        } else {
            buf.extend_from_slice(format!("line number {}\n", n).as_bytes());
        }
    }
    buf
}

fn bench_longest_common(c: &mut Criterion) {
    let sizes = [1_000usize, 10_000, 50_000];

    let mut group = c.benchmark_group("longest_common");
    for &size in &sizes {
        let opts = NormalizeOptions::default();
        let text_a = make_text(size, 10, "left");
        let text_b = make_text(size, 10, "right");
        let seq_a = parse_lines(&text_a, &opts);
        let seq_b = parse_lines(&text_b, &opts);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("sparse_changes", size),
            &(&seq_a, &seq_b),
            |bench, (a, b)| {
                bench.iter(|| lcs::longest_common(a, b));
            },
        );
    }
    group.finish();
}

fn bench_parse_lines(c: &mut Criterion) {
    let text = make_text(50_000, 0, "");

    let mut group = c.benchmark_group("parse_lines");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("plain", |bench| {
        let opts = NormalizeOptions::default();
        bench.iter(|| parse_lines(&text, &opts));
    });
    group.bench_function("strip_blanks", |bench| {
        let opts = NormalizeOptions {
            strip_blanks: true,
            ..NormalizeOptions::default()
        };
        bench.iter(|| parse_lines(&text, &opts));
    });
    group.finish();
}

criterion_group!(benches, bench_longest_common, bench_parse_lines);
criterion_main!(benches);
