use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use galactic_filter::models::RawRow;
use galactic_filter::processors::{CoordinateExtractor, GalacticTransformer, LongitudeFilter};
use galactic_filter::readers::MemoryTable;
use galactic_filter::utils::coordinates::{parse_dec, parse_ra};
use galactic_filter::writers::MemorySink;
use galactic_filter::{Pipeline, PipelineConfig};

// Create a target list spread over the whole sky
fn create_test_rows(count: usize) -> Vec<RawRow> {
    (0..count)
        .map(|i| {
            let hours = i % 24;
            let minutes = (i * 7) % 60;
            let degrees = (i * 13) % 90;
            let sign = if i % 2 == 0 { '+' } else { '-' };
            RawRow::from_cells(
                &format!("Target {}", i),
                &format!("{} {} {}.5", hours, minutes, i % 60),
                &format!("{}{} {} 12.3", sign, degrees, (i * 3) % 60),
            )
        })
        .collect()
}

fn benchmark_parsing(c: &mut Criterion) {
    c.bench_function("parse_ra_dec", |b| {
        b.iter(|| {
            let ra = parse_ra(black_box("18 36 56.336")).unwrap();
            let dec = parse_dec(black_box("+38 47 1.28")).unwrap();
            black_box((ra, dec))
        })
    });
}

fn benchmark_transform(c: &mut Criterion) {
    let rows = create_test_rows(1000);
    let (table, _) = CoordinateExtractor::new().extract(&rows);
    let columns = table.compute_table();
    let transformer = GalacticTransformer::new();
    let filter = LongitudeFilter::default();

    c.bench_function("transform_and_filter_1000", |b| {
        b.iter(|| {
            let galactic = transformer.transform(black_box(&columns)).unwrap();
            black_box(filter.select(&galactic))
        })
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = Pipeline::new(&PipelineConfig::default()).unwrap();

    for size in [100, 1000, 10000].iter() {
        let rows = create_test_rows(*size);
        group.bench_with_input(BenchmarkId::new("in_memory", size), size, |b, _| {
            b.iter(|| {
                let mut source = MemoryTable::new(rows.clone());
                let mut sink = MemorySink::new();
                black_box(pipeline.run(&mut source, &mut sink).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parsing, benchmark_transform, benchmark_pipeline);
criterion_main!(benches);
