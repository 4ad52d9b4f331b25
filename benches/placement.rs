use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_placer::{Grid, Placer, place, scan};

fn bench_grid_construction(c: &mut Criterion) {
    c.bench_function("grid_new_v1", |b| {
        b.iter(|| Grid::for_version(black_box(1)).unwrap())
    });
    c.bench_function("grid_new_v40", |b| {
        b.iter(|| Grid::for_version(black_box(40)).unwrap())
    });
}

fn bench_scan(c: &mut Criterion) {
    let small = Grid::for_version(1).unwrap();
    c.bench_function("scan_v1", |b| b.iter(|| scan(black_box(&small)).unwrap()));

    let medium = Grid::for_version(10).unwrap();
    c.bench_function("scan_v10", |b| b.iter(|| scan(black_box(&medium)).unwrap()));

    let large = Grid::for_version(40).unwrap();
    c.bench_function("scan_v40", |b| b.iter(|| scan(black_box(&large)).unwrap()));
}

fn bench_place_end_to_end(c: &mut Criterion) {
    let bits_v1: Vec<bool> = (0..208).map(|i| i % 2 == 0).collect();
    c.bench_function("place_v1", |b| {
        b.iter(|| place(black_box(1), black_box(&bits_v1)).unwrap())
    });

    let large = Grid::for_version(40).unwrap();
    let bits_v40: Vec<bool> = (0..large.usable_count()).map(|i| i % 2 == 0).collect();
    c.bench_function("place_v40", |b| {
        b.iter(|| place(black_box(40), black_box(&bits_v40)).unwrap())
    });
}

fn bench_placer_cached(c: &mut Criterion) {
    let bits: Vec<bool> = (0..208).map(|i| i % 2 == 0).collect();
    c.bench_function("placer_cached_v1", |b| {
        let mut placer = Placer::new();
        b.iter(|| {
            let mut grid = Grid::for_version(1).unwrap();
            placer.place_into(&mut grid, black_box(&bits)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_grid_construction,
    bench_scan,
    bench_place_end_to_end,
    bench_placer_cached
);
criterion_main!(benches);
