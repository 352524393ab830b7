//! Reconciliation Benchmarks
//!
//! Benchmarks the merge over growing collections. The algorithm is a
//! quadratic scan (every local quote probes the whole remote), which is
//! fine at interactive sizes; this keeps an eye on where it stops
//! being fine.
//!
//! Run with: cargo bench --bench reconcile_bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use quotesync::domain::quote::Quote;
use quotesync::domain::reconcile::reconcile;

/// Build a local/remote pair with roughly half the quotes shared.
fn collections(size: usize) -> (Vec<Quote>, Vec<Quote>) {
    let shared: Vec<Quote> = (0..size / 2)
        .map(|i| Quote {
            text: format!("shared quote {i}"),
            category: format!("category-{}", i % 7),
        })
        .collect();

    let mut local = shared.clone();
    local.extend((0..size / 2).map(|i| Quote {
        text: format!("local quote {i}"),
        category: format!("category-{}", i % 5),
    }));

    let mut remote = shared;
    remote.extend((0..size / 2).map(|i| Quote {
        text: format!("remote quote {i}"),
        category: format!("category-{}", i % 3),
    }));

    (local, remote)
}

fn bench_reconcile(c: &mut Criterion) {
    for size in [10, 100, 1_000] {
        let (local, remote) = collections(size);
        c.bench_function(&format!("reconcile_{size}"), |b| {
            b.iter(|| reconcile(black_box(&local), black_box(&remote)));
        });
    }
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
