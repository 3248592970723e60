use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{rng, Board, Grid};
use tui_2048::types::Direction;

fn crowded_board() -> Board {
    Board::from_values(&[
        vec![2, 2, 4, 8],
        vec![0, 4, 4, 16],
        vec![2, 0, 2, 0],
        vec![8, 8, 8, 8],
    ])
    .unwrap()
}

fn bench_slide(c: &mut Criterion) {
    let board = crowded_board();

    c.bench_function("slide_left_4x4", |b| {
        b.iter(|| {
            let mut grid = Grid::from_board(board.clone(), rng::seeded(1));
            grid.slide(black_box(Direction::Left))
        })
    });
}

fn bench_step(c: &mut Criterion) {
    let mut grid = Grid::seeded(4, 4, 12345);
    let mut i = 0usize;

    c.bench_function("step_cycle", |b| {
        b.iter(|| {
            if grid.is_finished() {
                grid = Grid::seeded(4, 4, 12345);
            }
            i = i.wrapping_add(1);
            grid.step(black_box(Direction::ALL[i % 4]))
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let grid = Grid::from_board(crowded_board(), rng::seeded(1));

    c.bench_function("legal_moves", |b| b.iter(|| black_box(&grid).legal_moves()));
}

fn bench_is_finished(c: &mut Criterion) {
    let grid = Grid::from_board(
        Board::from_values(&[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ])
        .unwrap(),
        rng::seeded(1),
    );

    c.bench_function("is_finished_locked", |b| b.iter(|| black_box(&grid).is_finished()));
}

criterion_group!(
    benches,
    bench_slide,
    bench_step,
    bench_legal_moves,
    bench_is_finished
);
criterion_main!(benches);
