use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lipi_core::transliterate;

fn bench_transliterate(c: &mut Criterion) {
    let inputs = [
        ("dictionary", "namaste bharat, aap kaise ho?"),
        ("decomposition", "khargosh chalta raha tha kahin"),
        ("mixed", "hello duniya! mausam accha hai 123"),
        ("passthrough", "  ., !? ;; :: 123 @#$  "),
    ];

    let mut group = c.benchmark_group("transliterate");
    for (name, text) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, t| {
            b.iter(|| transliterate(t));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transliterate);
criterion_main!(benches);
