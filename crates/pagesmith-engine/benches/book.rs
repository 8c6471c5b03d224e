use criterion::{Criterion, criterion_group, criterion_main};
use pagesmith_engine::Book;
mod common;

fn bench_book_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("book");
    group.sample_size(10);

    let content = common::generate_manuscript(500);
    group.bench_function("build", |b| {
        b.iter(|| {
            let book = Book::new(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(book);
        });
    });

    let book = Book::new(&content).unwrap();
    group.bench_function("dump", |b| {
        b.iter(|| {
            for page in book.pages() {
                std::hint::black_box(page.dump());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_book_construction);
criterion_main!(benches);
