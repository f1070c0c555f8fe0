//! Benchmarks for record line parsing.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use patents_core::error::ResolutionError;
use patents_core::{PatentRecord, PatentUniverseRecord, SecurityIdentifier, Symbol, SymbolResolver};

struct Normalizing;

impl SymbolResolver for Normalizing {
    fn resolve(
        &self,
        identifier: &str,
        ticker: &str,
        _date: NaiveDate,
    ) -> Result<Symbol, ResolutionError> {
        Ok(Symbol::new(SecurityIdentifier::normalize(identifier), ticker))
    }
}

fn benchmark_parse(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2022, 2, 15).unwrap();
    let symbol = Symbol::equity("AAPL");
    let mut group = c.benchmark_group("parse_line");

    group.bench_function("time_series", |b| {
        b.iter(|| {
            PatentRecord::parse_line(
                black_box(&symbol),
                black_box("2022-02-15,5,1234,50,150,500,8,3,0.75,2"),
                date,
            )
        })
    });

    group.bench_function("universe", |b| {
        b.iter(|| {
            PatentUniverseRecord::parse_line(
                black_box("AAPL US EQUITY,AAPL,5,1234,50,150,500,8,3,0.75,2"),
                date,
                &Normalizing,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_parse);
criterion_main!(benches);
