//! Benchmarks for pagetab pagination performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagetab::{generate, ColumnSpec, GenerateOptions, Row};

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("First Name", "first_name", 15),
        ColumnSpec::new("Last Name", "last_name", 15),
        ColumnSpec::new("Count", "count", 5),
        ColumnSpec::new("Email", "email", 15),
        ColumnSpec::new("Description", "description", 20),
    ]
}

/// Creates synthetic rows with a mix of short and wrapping cells.
fn create_rows(count: usize) -> Vec<Row> {
    (1..=count)
        .map(|i| {
            Row::new()
                .with("first_name", format!("first_name {}", i))
                .with("last_name", format!("last_name_{}", i))
                .with("count", i)
                .with("email", format!("my_email_add_{}@example.com", i))
                .with("description", "some description text ".repeat(i % 4))
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let columns = columns();
    let options = GenerateOptions::default();

    let mut group = c.benchmark_group("generate");
    for count in [100, 2000] {
        let rows = create_rows(count);
        group.bench_function(format!("{}_rows", count), |b| {
            b.iter(|| generate(black_box(&columns), black_box(&rows), &options))
        });
    }
    group.finish();
}

fn bench_to_html(c: &mut Criterion) {
    let doc = generate(&columns(), &create_rows(2000), &GenerateOptions::default()).unwrap();
    c.bench_function("to_html_2000_rows", |b| b.iter(|| black_box(&doc).to_html()));
}

criterion_group!(benches, bench_generate, bench_to_html);
criterion_main!(benches);
