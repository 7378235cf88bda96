use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pyrees_core::{analyze, Analyzer};

/// Synthetic module with `functions` small functions
fn generate_module(functions: usize) -> String {
    let mut source = String::from("# Generated module for benchmarking.\nimport os\n\n");
    for i in 0..functions {
        source.push_str(&format!(
            "\ndef handler_{i}(request_path, retry_count=3):\n    # Resolve the path before retrying.\n    resolved_path = os.path.abspath(request_path)\n    for attempt in range(retry_count):\n        if os.path.exists(resolved_path):\n            return attempt\n    return None\n"
        ));
    }
    source
}

fn bench_analyze(c: &mut Criterion) {
    let small = generate_module(10);
    let large = generate_module(500);
    let analyzer = Analyzer::default();

    c.bench_function("analyze_10_functions", |b| b.iter(|| analyze(black_box(&small))));
    c.bench_function("analyze_500_functions", |b| {
        b.iter(|| analyzer.analyze(black_box(&large)))
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
