use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use masked_name::codec::{mask, split};
use masked_name::{Delimiter, Name};

fn sample_data(components: usize) -> String {
    (0..components)
        .map(|i| match i % 3 {
            0 => format!("plain{i}"),
            1 => format!(r"dot\.ted{i}"),
            _ => format!(r"back\\slash{i}"),
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn criterion_benchmark(c: &mut Criterion) {
    let delimiter = Delimiter::default();
    let data = sample_data(256);

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("split", |b| {
        b.iter(|| split(&data, delimiter));
    });

    group.bench_function("mask", |b| {
        b.iter(|| mask(&data, delimiter));
    });

    group.finish();

    let mut group = c.benchmark_group("name");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("parse", |b| {
        b.iter(|| Name::parse(&data, delimiter));
    });

    let name = Name::parse(&data, delimiter);

    group.bench_function("as_data_string", |b| {
        b.iter(|| name.as_data_string());
    });

    group.bench_function("insert_middle", |b| {
        b.iter_batched(
            || name.clone(),
            |name| name.insert(128, r"in\.serted").unwrap(),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
