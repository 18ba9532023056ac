//! Benchmarks for the wide-to-long reshape and panel pass
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gdpanel::dataset::WideTableLoader;
use gdpanel::panel::{FilterSelection, Panel, YearRange};

/// Build a wide CSV with `countries` rows and years 1960..=2022
fn wide_csv(countries: usize) -> String {
    let mut csv = String::from("Country Code");
    for year in 1960..=2022 {
        csv.push_str(&format!(",{}", year));
    }
    csv.push('\n');

    for i in 0..countries {
        csv.push_str(&format!("C{:03}", i));
        for year in 1960..=2022 {
            csv.push_str(&format!(",{}", (i + 1) * (year as usize)));
        }
        csv.push('\n');
    }
    csv
}

fn bench_reshape(c: &mut Criterion) {
    let mut group = c.benchmark_group("reshape");
    let loader = WideTableLoader::new();

    for countries in [10, 100, 250] {
        let csv = wide_csv(countries);
        group.throughput(Throughput::Elements((countries * 63) as u64));

        group.bench_function(format!("load_{}_countries", countries), |b| {
            b.iter(|| loader.load_str(black_box(&csv)).unwrap())
        });
    }

    group.finish();
}

fn bench_panel_pass(c: &mut Criterion) {
    let loader = WideTableLoader::new();
    let observations = loader.load_str(&wide_csv(250)).unwrap();
    let selection = FilterSelection::new(YearRange::new(1980, 2020).unwrap())
        .countries(["C001", "C050", "C100", "C150", "C200", "C249"]);

    c.bench_function("panel_pass_250_countries", |b| {
        b.iter(|| Panel::from_observations(black_box(&observations), black_box(&selection)))
    });
}

criterion_group!(benches, bench_reshape, bench_panel_pass);
criterion_main!(benches);
