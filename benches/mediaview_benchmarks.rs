use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mediaview::*;

const GENRES: [&str; 6] = ["Drama", "Comedy", "Crime", "Horror", "Documentary", "Sci-Fi"];

fn synthetic_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| Record {
            title: Some(format!("Title {}", i)),
            year: Some(1950.0 + (i % 70) as f64),
            media_type: if i % 4 == 0 { MediaType::Tv } else { MediaType::Movie },
            rating: if i % 17 == 0 { None } else { Some((i * 37 % 100) as f64 / 10.0) },
            metascore: if i % 5 == 0 { None } else { Some((i * 53 % 100) as f64) },
            votes: Some((i * 911 % 100_000) as f64),
            duration_min: Some(80.0 + (i % 90) as f64),
            genres: vec![GENRES[i % GENRES.len()].to_string(), GENRES[(i / 3) % GENRES.len()].to_string()],
            anomaly_duration_outlier: i % 29 == 0,
            ..Record::default()
        })
        .collect()
}

fn bench_compose_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_default");

    for size in [100, 1000, 10000].iter() {
        let records = synthetic_records(*size);
        let state = ViewState::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| compose(black_box(&records), black_box(&state)).page_slice().len());
        });
    }
    group.finish();
}

fn bench_compose_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_filtered");

    for size in [100, 1000, 10000].iter() {
        let records = synthetic_records(*size);
        let state = ViewState {
            query: "title 1".to_string(),
            genre: GenreFilter::from("Drama"),
            sort_key: SortKey::Title,
            sort_dir: SortDirection::Ascending,
            ..ViewState::default()
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| compose(black_box(&records), black_box(&state)).filtered_count());
        });
    }
    group.finish();
}

fn bench_box_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_stats");

    for size in [100, 1000, 10000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| (i * 7919 % 1000) as f64 / 100.0).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| BoxStats::compute(black_box(values.iter().copied())));
        });
    }
    group.finish();
}

fn bench_genre_vocabulary(c: &mut Criterion) {
    let records = synthetic_records(10000);

    c.bench_function("genre_vocabulary_10000", |b| {
        b.iter(|| GenreVocabulary::from_records(black_box(&records)).len());
    });
}

criterion_group!(
    benches,
    bench_compose_default,
    bench_compose_filtered,
    bench_box_stats,
    bench_genre_vocabulary
);
criterion_main!(benches);
