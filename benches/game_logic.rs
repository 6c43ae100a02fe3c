use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hoop_duel::core::{geometry, Board, Game};
use hoop_duel::types::{Player, ThrowAction, FLIGHT_MS, POWER_TICK_MS, TICK_MS};

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("geometry_resolve", |b| {
        b.iter(|| geometry::resolve(black_box(62.0), black_box(-12.0), black_box(true)))
    });
}

fn bench_line_scoring(c: &mut Criterion) {
    c.bench_function("score_completed_row", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.apply_placement(Player::X, &[0, 1]);
            board.apply_placement(Player::X, &[2, 3]);
            board.score_lines(Player::X)
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(TICK_MS));
        })
    });
}

fn bench_full_throw_cycle(c: &mut Criterion) {
    c.bench_function("full_throw_cycle", |b| {
        b.iter(|| {
            let mut game = Game::new(black_box(12345));
            game.apply_action(ThrowAction::ChargeStart);
            game.tick(POWER_TICK_MS * 10);
            game.apply_action(ThrowAction::ChargeRelease);
            game.tick(FLIGHT_MS);
            game.take_last_event()
        })
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_line_scoring,
    bench_tick,
    bench_full_throw_cycle
);
criterion_main!(benches);
