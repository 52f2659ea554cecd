//! Shortest-path benchmark over a seeded synthetic dataset.

use costar_core::{shortest_path, FilmStore, Movie, Person, SearchConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn build_store(people: usize, movies: usize, cast_size: usize) -> FilmStore {
    let mut rng = StdRng::seed_from_u64(7);
    let mut store = FilmStore::with_capacity(people, movies);
    for i in 0..people {
        store
            .add_person(Person::new(&format!("p{i}"), &format!("Person {i}")))
            .unwrap();
    }
    for m in 0..movies {
        store
            .add_movie(Movie::new(&format!("m{m}"), &format!("Movie {m}")))
            .unwrap();
        for _ in 0..cast_size {
            let p = rng.gen_range(0..people);
            store.add_credit(&format!("p{p}"), &format!("m{m}"));
        }
    }
    store
}

fn bench_shortest_path(c: &mut Criterion) {
    let store = build_store(2_000, 600, 8);
    let config = SearchConfig::default();

    c.bench_function("shortest_path/2000_people", |b| {
        b.iter(|| shortest_path(&store, black_box("p0"), black_box("p1"), &config));
    });

    let sparse = build_store(2_000, 200, 2);
    c.bench_function("shortest_path/sparse", |b| {
        b.iter(|| shortest_path(&sparse, black_box("p0"), black_box("p1"), &config));
    });
}

criterion_group!(benches, bench_shortest_path);
criterion_main!(benches);
