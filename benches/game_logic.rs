use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tui_blockfall::core::{rotate, shape_for, Field, Game, Piece};
use tui_blockfall::term::{GameView, Viewport};
use tui_blockfall::types::{Direction, PieceKind};

/// Play ticks until the game ends, then start over.
fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if game.is_over() {
                game = Game::new(12345);
                game.start();
            }
            black_box(game.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut full = Field::new();
    for row in 0..4 {
        for col in 0..10 {
            full.set(row, col, true);
        }
    }

    c.bench_function("clear_4_rows", |b| {
        b.iter_batched(
            || full.clone(),
            |mut field| black_box(field.clear_full_rows()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_shift(c: &mut Criterion) {
    let field = Field::new();
    let mut piece = Piece::new(PieceKind::T);

    c.bench_function("shift_left_right", |b| {
        b.iter(|| {
            piece.shift(&field, Direction::Left, 1);
            piece.shift(&field, black_box(Direction::Right), 1);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let field = Field::new();
    let mut piece = Piece::at(PieceKind::L, 10, 4);
    let matrix = shape_for(PieceKind::J);

    c.bench_function("rotate_matrix", |b| {
        b.iter(|| rotate(black_box(&matrix), true))
    });
    c.bench_function("rotate_piece", |b| {
        b.iter(|| piece.rotate(&field, black_box(true)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();
    let snap = game.snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(80, 24));

    c.bench_function("render_frame", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_shift,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
