//! Benchmarks for the snapshot build and the recommendation lookup
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic dataset so no files are needed.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{Book, Dataset, RatingEvent, UserId};
use pipeline::{PipelineConfig, Snapshot};

const TITLES: usize = 600;
const USERS: UserId = 400;
const RATINGS_PER_USER: usize = 250;

fn synthetic_dataset() -> Dataset {
    let books = (0..TITLES)
        .map(|i| Book {
            isbn: format!("B{i:05}"),
            title: format!("Title {i}"),
            author: "Bench".to_string(),
            year_of_publication: "2000".to_string(),
            publisher: String::new(),
            image_url_s: String::new(),
            image_url_m: String::new(),
            image_url_l: String::new(),
        })
        .collect();

    let ratings = (1..=USERS)
        .flat_map(|user| {
            (0..RATINGS_PER_USER).map(move |k| RatingEvent {
                user_id: user,
                isbn: format!("B{:05}", (user as usize * 7 + k) % TITLES),
                rating: ((user as usize * 31 + k * 17) % 11) as u8,
            })
        })
        .collect();

    Dataset::from_tables(books, vec![], ratings)
}

fn bench_build(c: &mut Criterion) {
    let dataset = synthetic_dataset();
    let config = PipelineConfig::default();

    c.bench_function("snapshot_build", |b| {
        b.iter(|| {
            let snapshot = Snapshot::build(black_box(&dataset), &config).unwrap();
            black_box(snapshot)
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let dataset = synthetic_dataset();
    let snapshot = Snapshot::build(&dataset, &PipelineConfig::default()).unwrap();

    c.bench_function("recommend", |b| {
        b.iter(|| black_box(snapshot.recommend(black_box(1))))
    });
}

criterion_group!(benches, bench_build, bench_recommend);
criterion_main!(benches);
