//! Benchmark suite for readme-deps
//!
//! Run with: `cargo bench --bench benchmarks`
//! View report: `open target/criterion/report/index.html`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use readme_deps::markdown::{DependencyRecord, read_tables, render_table, write_tables};

// =============================================================================
// Test Data Generation
// =============================================================================

fn generate_records(count: usize) -> Vec<DependencyRecord> {
    (0..count)
        .map(|i| {
            DependencyRecord::new(
                format!("package-{i}"),
                format!("https://www.npmjs.com/package/package-{i}"),
                format!("Description of package number {i}"),
                "MIT",
            )
        })
        .collect()
}

fn generate_readme(dep_count: usize) -> String {
    let mut content = String::from("# Project\n\n");
    for i in 0..50 {
        content.push_str(&format!("Paragraph {i} of the project documentation.\n\n"));
    }

    let table = render_table(&generate_records(dep_count));
    content.push_str("## Dependencies\n\n### Runtime Dependencies\n\n");
    content.push_str(&table);
    content.push_str("\n### Development Dependencies\n\n");
    content.push_str(&table);
    content.push_str("\n## License\n\nMIT\n");
    content
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_read_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_tables");
    for size in [10, 100, 1000] {
        let readme = generate_readme(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &readme, |b, readme| {
            b.iter(|| read_tables(black_box(readme).lines()))
        });
    }
    group.finish();
}

fn bench_write_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_tables");
    for size in [10, 100, 1000] {
        let readme = generate_readme(size);
        let table = render_table(&generate_records(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &readme, |b, readme| {
            b.iter(|| write_tables(black_box(readme).lines(), &table, &table))
        });
    }
    group.finish();
}

fn bench_render_table(c: &mut Criterion) {
    let records = generate_records(1000);
    c.bench_function("render_table/1000", |b| {
        b.iter(|| render_table(black_box(&records)))
    });
}

criterion_group!(benches, bench_read_tables, bench_write_tables, bench_render_table);
criterion_main!(benches);
