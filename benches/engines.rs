use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pocket_arcade::core::{Board2048Config, Direction, GameRng, MemoryConfig, SnakeConfig, WallPolicy};
use pocket_arcade::games::board2048::{slide_merge_left, Board};
use pocket_arcade::games::{Board2048State, MemoryState, SnakeState};

fn bench_slide_merge_row(c: &mut Criterion) {
    let row = [2, 2, 4, 0, 4, 8];
    c.bench_function("slide_merge_left_6", |b| {
        b.iter(|| slide_merge_left(black_box(&row)))
    });
}

fn bench_board_slide(c: &mut Criterion) {
    let board = Board::from_rows(&[
        vec![2, 2, 4, 0, 4, 8],
        vec![0, 4, 4, 2, 0, 2],
        vec![8, 0, 8, 16, 16, 0],
        vec![2, 4, 8, 16, 32, 64],
        vec![0, 0, 0, 2, 2, 2],
        vec![4, 0, 4, 0, 4, 0],
    ]);

    c.bench_function("board_slide_all_directions", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                black_box(board.slide(direction));
            }
        })
    });
}

fn bench_2048_move(c: &mut Criterion) {
    let state = Board2048State::new(&Board2048Config::default(), 0, GameRng::new(12345));

    c.bench_function("board2048_apply_move", |b| {
        b.iter(|| state.apply_move(black_box(Direction::Left)))
    });
}

fn bench_snake_tick(c: &mut Criterion) {
    let config = SnakeConfig::default().with_wall_policy(WallPolicy::Wrap);
    let state = SnakeState::new(&config, 0, GameRng::new(12345));

    c.bench_function("snake_tick", |b| b.iter(|| black_box(&state).tick()));
}

fn bench_memory_deal(c: &mut Criterion) {
    let config = MemoryConfig::default();

    c.bench_function("memory_deal_8_pairs", |b| {
        b.iter(|| MemoryState::new(&config, 0, GameRng::new(black_box(12345))))
    });
}

criterion_group!(
    benches,
    bench_slide_merge_row,
    bench_board_slide,
    bench_2048_move,
    bench_snake_tick,
    bench_memory_deal
);
criterion_main!(benches);
