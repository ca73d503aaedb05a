use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use triage_compactor::{calculate_line_importance, compress_log_for_ai_analysis, LogCompressor};

const NOISE: &[&str] = &[
    "DEBUG: resolving workspace members",
    "##[group]Run actions/setup-node@v4",
    "Downloading https://registry.npmjs.org/react 64%",
    "   Compiling serde v1.0.200",
    "",
];

const SIGNAL: &[&str] = &[
    "npm ERR! code ELIFECYCLE",
    "FAILED tests/test_api.py::test_login - AssertionError",
    "Traceback (most recent call last):",
    "  File \"/app/src/main.py\", line 42, in handler",
    "Error: Process completed with exit code 1.",
];

fn generate_log(lines: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    (0..lines)
        .map(|i| {
            if rng.gen_bool(0.1) {
                SIGNAL[rng.gen_range(0..SIGNAL.len())].to_string()
            } else {
                format!("{} #{i}", NOISE[rng.gen_range(0..NOISE.len())])
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_compress(c: &mut Criterion) {
    let plain = LogCompressor::default();
    let budgeted = LogCompressor::with_target_tokens(2_000);
    for &size in &[1_000usize, 10_000, 100_000] {
        let log = generate_log(size);
        c.bench_function(&format!("compress_{size}_lines"), |b| {
            b.iter(|| black_box(plain.compress(black_box(&log))))
        });
        c.bench_function(&format!("compress_budget_{size}_lines"), |b| {
            b.iter(|| black_box(budgeted.compress(black_box(&log))))
        });
    }
}

fn bench_ai_analysis(c: &mut Criterion) {
    let log = generate_log(10_000);
    c.bench_function("compress_for_ai_analysis_10k_lines", |b| {
        b.iter(|| black_box(compress_log_for_ai_analysis(black_box(&log), 8_000)))
    });
}

fn bench_importance(c: &mut Criterion) {
    c.bench_function("line_importance", |b| {
        b.iter(|| {
            for line in SIGNAL.iter().chain(NOISE) {
                black_box(calculate_line_importance(black_box(line)));
            }
        })
    });
}

criterion_group!(benches, bench_compress, bench_ai_analysis, bench_importance);
criterion_main!(benches);
