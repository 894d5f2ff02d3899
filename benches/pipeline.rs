//! Benchmarks for the ged parsing pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ged::export::to_json;
use ged::parser::ParseSession;

/// A small but complete file: header, two individuals, one family.
const SMALL: &str = "0 HEAD\n\
1 SOUR bench\n\
1 GEDC\n\
2 VERS 5.5.5\n\
1 CHAR UTF-8\n\
0 @I1@ INDI\n\
1 NAME John /Smith/\n\
1 SEX M\n\
1 BIRT\n\
2 DATE 15 JAN 1900\n\
2 PLAC Ottawa, Ontario, Canada\n\
0 @I2@ INDI\n\
1 NAME Jane /Doe/\n\
1 SEX F\n\
0 @F1@ FAM\n\
1 HUSB @I1@\n\
1 WIFE @I2@\n\
1 MARR\n\
2 DATE BET 1920 AND 1925\n\
0 TRLR\n";

fn lines(source: &str) -> Vec<String> {
    source.lines().map(str::to_string).collect()
}

/// Build a larger synthetic tree: `n` couples with one child each.
fn synthesize(n: usize) -> Vec<String> {
    let mut out = vec!["0 HEAD".to_string(), "1 GEDC".to_string(), "2 VERS 5.5.5".to_string()];
    for i in 0..n {
        out.push(format!("0 @I{}@ INDI", i * 3 + 1));
        out.push(format!("1 NAME Person{} /Family{}/", i, i));
        out.push("1 SEX M".to_string());
        out.push("1 BIRT".to_string());
        out.push(format!("2 DATE {} JAN {}", (i % 28) + 1, 1800 + (i % 200)));
        out.push(format!("0 @I{}@ INDI", i * 3 + 2));
        out.push(format!("1 NAME Spouse{} /Family{}/", i, i));
        out.push("1 SEX F".to_string());
        out.push(format!("0 @I{}@ INDI", i * 3 + 3));
        out.push(format!("1 NAME Child{} /Family{}/", i, i));
        out.push(format!("0 @F{}@ FAM", i + 1));
        out.push(format!("1 HUSB @I{}@", i * 3 + 1));
        out.push(format!("1 WIFE @I{}@", i * 3 + 2));
        out.push(format!("1 CHIL @I{}@", i * 3 + 3));
    }
    out.push("0 TRLR".to_string());
    out
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let small = lines(SMALL);
    group.bench_function("parse_small", |b| {
        b.iter(|| {
            let mut session = ParseSession::new();
            session.parse(black_box(&small)).unwrap()
        })
    });

    let large = synthesize(500);
    group.bench_function("parse_500_families", |b| {
        b.iter(|| {
            let mut session = ParseSession::new();
            session.parse(black_box(&large)).unwrap()
        })
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    let large = synthesize(500);
    let mut session = ParseSession::new();
    let document = session.parse(&large).unwrap();

    group.bench_function("to_json_500_families", |b| {
        b.iter(|| to_json(black_box(&document), &[]))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_export);
criterion_main!(benches);
