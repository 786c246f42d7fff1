use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridblast::core::levelgen::blaster_grid;
use gridblast::core::region::{find_region, has_region_of_size};
use gridblast::core::{gravity, GameRules, GameState, Grid, SimpleRng};
use gridblast::types::{Color, Coord, Topology};

fn monochrome_grid(rows: u16, cols: u16) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for coord in grid.coords().collect::<Vec<_>>() {
        grid.set(coord, Some(Color::Red));
    }
    grid
}

fn checkerboard_grid(rows: u16, cols: u16) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for coord in grid.coords().collect::<Vec<_>>() {
        let color = if (coord.row + coord.col) % 2 == 0 {
            Color::Red
        } else {
            Color::Blue
        };
        grid.set(coord, Some(color));
    }
    grid
}

fn bench_find_region_worst_case(c: &mut Criterion) {
    // One region spanning the whole board
    let grid = monochrome_grid(30, 30);

    c.bench_function("find_region_30x30_monochrome", |b| {
        b.iter(|| find_region(black_box(&grid), Topology::Square, Coord::new(15, 15)))
    });
}

fn bench_no_moves_scan(c: &mut Criterion) {
    // Checkerboards force the scan to visit every cell before failing
    let grid = checkerboard_grid(30, 30);

    c.bench_function("has_region_30x30_checkerboard", |b| {
        b.iter(|| has_region_of_size(black_box(&grid), Topology::Square, 2))
    });
}

fn bench_drop_to_floor(c: &mut Criterion) {
    let mut grid = blaster_grid(30, 30, 10, &mut SimpleRng::new(1));
    // Punch holes so gravity has work to do each iteration
    for coord in grid.coords().collect::<Vec<_>>() {
        if (coord.row * 7 + coord.col * 3) % 5 == 0 {
            grid.set(coord, None);
        }
    }

    c.bench_function("drop_to_floor_30x30", |b| {
        b.iter(|| {
            let mut scratch = grid.clone();
            gravity::drop_to_floor(&mut scratch);
            scratch
        })
    });
}

fn bench_drop_unanchored(c: &mut Criterion) {
    let grid = blaster_grid(15, 20, 10, &mut SimpleRng::new(2));

    c.bench_function("drop_unanchored_15x20", |b| {
        b.iter(|| {
            let mut scratch = grid.clone();
            gravity::drop_unanchored(&mut scratch, Topology::Offset)
        })
    });
}

fn bench_session_turn(c: &mut Criterion) {
    let grid = blaster_grid(12, 10, 1, &mut SimpleRng::new(3));
    let session = GameState::new(GameRules::block_blaster(), grid);

    c.bench_function("blaster_session_turn", |b| {
        b.iter(|| {
            let mut scratch = session.clone();
            scratch.play(black_box(Coord::new(6, 5)))
        })
    });
}

criterion_group!(
    benches,
    bench_find_region_worst_case,
    bench_no_moves_scan,
    bench_drop_to_floor,
    bench_drop_unanchored,
    bench_session_turn
);
criterion_main!(benches);
