//! Filtering and pagination benchmarks

use bookcase_core::{BookRecord, FilterCriteria, PageSize, ViewState};
use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

fn large_collection(n: usize) -> Vec<BookRecord> {
    let published = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            BookRecord::new(
                format!("book-{}", i),
                format!("Volume {} of the Collected Works", i),
                format!("author-{}", i % 97),
                published,
            )
            .with_genre(format!("genre-{}", i % 13))
        })
        .collect()
}

fn filtering_benchmark(c: &mut Criterion) {
    let books = large_collection(10_000);
    let size = PageSize::new(36).unwrap();

    c.bench_function("filter_title_and_genre", |b| {
        let criteria = FilterCriteria::from_form("collected", "any", "genre-7");
        b.iter(|| std::hint::black_box(ViewState::filter(&books, &criteria).matches().len()))
    });

    c.bench_function("page_through_all", |b| {
        b.iter(|| {
            let mut view = ViewState::filter(&books, &FilterCriteria::any());
            while view.can_advance(size) {
                view = view.advance_page(size);
            }
            std::hint::black_box(view.page())
        })
    });
}

criterion_group!(benches, filtering_benchmark);
criterion_main!(benches);
