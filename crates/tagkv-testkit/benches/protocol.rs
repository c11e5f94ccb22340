//! Write/read throughput of the typed protocol over each backing store.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use tagkv::store::{KvStore, MemoryStore, SqliteStore};
use tagkv::{TypedStorage, Value};

fn stores() -> Vec<(&'static str, TypedStorage<Box<dyn KvStore>>)> {
    vec![
        (
            "memory",
            TypedStorage::new(Box::new(MemoryStore::new()) as Box<dyn KvStore>),
        ),
        (
            "sqlite",
            TypedStorage::new(
                Box::new(SqliteStore::open_memory().expect("open sqlite")) as Box<dyn KvStore>
            ),
        ),
    ]
}

fn bench_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("string");
    for (name, storage) in stores() {
        group.bench_with_input(BenchmarkId::new("set", name), &storage, |b, s| {
            b.iter(|| s.set_string(black_box("key"), black_box("value")).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("get", name), &storage, |b, s| {
            b.iter(|| s.get_string(black_box("key")).unwrap())
        });
    }
    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let entries: Vec<_> = (0..64).map(|i| (json!(i), json!({"n": i}))).collect();
    let map = Value::map(entries);

    let mut group = c.benchmark_group("map");
    for (name, storage) in stores() {
        group.bench_with_input(BenchmarkId::new("set", name), &storage, |b, s| {
            b.iter(|| s.set_map(black_box("key"), map.clone()).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("get", name), &storage, |b, s| {
            b.iter(|| s.get_map(black_box("key")).unwrap())
        });
    }
    group.finish();
}

fn bench_first_write(c: &mut Criterion) {
    c.bench_function("first_write_and_remove", |b| {
        let storage = TypedStorage::new(MemoryStore::new());
        b.iter(|| {
            storage.set_number("fresh", black_box(1.0)).unwrap();
            storage.remove("fresh").unwrap();
        })
    });
}

criterion_group!(benches, bench_string, bench_map, bench_first_write);
criterion_main!(benches);
