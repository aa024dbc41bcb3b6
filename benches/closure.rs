use criterion::{black_box, criterion_group, criterion_main, Criterion};
use idempotent_rig::prelude::*;

fn ring(n: usize) -> OperationTables {
    OperationTables::from_fn(
        n,
        |x, y| Element::new(x.index() * y.index() % n).unwrap(),
        |x, y| Element::new((x.index() + y.index()) % n).unwrap(),
    )
    .unwrap()
}

fn bench_tuple_multiply(c: &mut Criterion) {
    let x = Tuple::from([1, 2, 3, 1, 2, 3, 1]);
    let y = Tuple::from([3, 0, 1, 2, 0, 1, 3]);
    c.bench_function("tuple_multiply", |b| {
        b.iter(|| black_box(x).multiply(&black_box(y)))
    });
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("tables_256", |b| {
        b.iter(|| OperationTables::from_fn(256, |x, _| x, |_, y| y).unwrap())
    });
}

fn bench_closure(c: &mut Criterion) {
    let z30 = ring(30);
    c.bench_function("closure_z30", |b| {
        b.iter(|| {
            let mut engine = PartitionEngine::seed(&z30).unwrap();
            engine.fix_label_membership().unwrap();
            engine.close(|_, _| {}).unwrap()
        })
    });
}

fn bench_rig_seed(c: &mut Criterion) {
    c.bench_function("rig_seed_direct", |b| {
        b.iter(|| PartitionEngine::seed(DirectAlgebra).unwrap().partition().class_count())
    });
}

criterion_group!(benches, bench_tuple_multiply, bench_table_build, bench_closure, bench_rig_seed);
criterion_main!(benches);
