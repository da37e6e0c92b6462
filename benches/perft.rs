use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chess_movegen::utils::perft;
use chess_movegen::{AttackTables, Position, init_attack_tables};

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("attack_tables_new", |b| b.iter(AttackTables::new));
}

fn bench_startpos_perft(c: &mut Criterion) {
    let tables = init_attack_tables();
    let pos = Position::startpos();

    let mut group = c.benchmark_group("perft_startpos");
    group.measurement_time(Duration::from_secs(10));

    for (depth, nodes) in [(1usize, 20u64), (2, 400), (3, 8902), (4, 197_281)] {
        group.throughput(Throughput::Elements(nodes));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let counted = perft(tables, black_box(&pos), depth);
                assert_eq!(counted, nodes);
                counted
            })
        });
    }

    group.finish();
}

fn bench_legal_generation(c: &mut Criterion) {
    let tables = init_attack_tables();
    let pos = Position::startpos();

    c.bench_function("generate_legal_moves_startpos", |b| {
        b.iter(|| tables.generate_legal_moves(black_box(&pos)).len())
    });
}

criterion_group!(
    benches,
    bench_table_build,
    bench_startpos_perft,
    bench_legal_generation
);
criterion_main!(benches);
