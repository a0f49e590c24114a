use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{slide_line, Board, BoardEngine};
use tui_2048::types::{Direction, GameConfig};

fn bench_slide_line(c: &mut Criterion) {
    let line = [Some(2), None, Some(2), Some(4), None, Some(4), Some(8), Some(8)];

    c.bench_function("slide_line_8", |b| {
        b.iter(|| slide_line(black_box(&line)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut engine = BoardEngine::classic(12345);
    engine.start();
    let mut i = 0;

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            if engine.is_loss() {
                engine.restart();
            }
            engine.apply_move(black_box(Direction::ALL[i % 4]));
            i += 1;
        })
    });
}

fn bench_has_any_move(c: &mut Criterion) {
    // Full board with a single merge left in the bottom-right corner.
    let board = Board::from_rows(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 2, 4, 4],
    ])
    .unwrap();
    let mut engine = BoardEngine::with_seed(GameConfig::default(), 1).unwrap();
    engine.resume(board, 0).unwrap();

    c.bench_function("has_any_move_full_board", |b| {
        b.iter(|| black_box(&engine).has_any_move())
    });
}

fn bench_game_to_loss(c: &mut Criterion) {
    c.bench_function("play_until_loss", |b| {
        b.iter(|| {
            let mut engine = BoardEngine::classic(black_box(7));
            engine.start();
            let mut i = 0;
            while !engine.is_loss() {
                let dir = Direction::ALL[i % 4];
                if !engine.apply_move(dir).changed {
                    i += 1;
                }
            }
            engine.score()
        })
    });
}

criterion_group!(
    benches,
    bench_slide_line,
    bench_apply_move,
    bench_has_any_move,
    bench_game_to_loss
);
criterion_main!(benches);
