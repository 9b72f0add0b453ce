use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Duration;

use conquest::board::{connected, PlayerId, Territory};
use conquest::bot::{best_attack, deploy_target, fortify_plan, play_turn};
use conquest::game::combat::{resolve_rolls, roll_dice};
use conquest::game::economy::reinforcements;
use conquest::game::{Game, GameConfig};

fn manual_game(seed: u64) -> Game {
    Game::new(GameConfig {
        seed: Some(seed),
        auto_bot_turn: false,
        ..GameConfig::default()
    })
}

fn bench_combat(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    c.bench_function("roll_and_resolve_3v2", |b| {
        b.iter(|| {
            let a = roll_dice(3, &mut rng);
            let d = roll_dice(2, &mut rng);
            resolve_rolls(black_box(&a), black_box(&d))
        })
    });
}

fn bench_reinforcements(c: &mut Criterion) {
    let game = manual_game(42);
    c.bench_function("reinforcements", |b| {
        b.iter(|| reinforcements(black_box(game.board()), black_box(PlayerId::Human)))
    });
}

fn bench_connectivity(c: &mut Criterion) {
    let game = manual_game(42);
    let board = game.board();
    let owner = board.owner_of(Territory::Alaska);
    let far = board
        .territories_of(owner)
        .last()
        .copied()
        .unwrap_or(Territory::Alaska);
    c.bench_function("connected_far_pair", |b| {
        b.iter(|| connected(black_box(Territory::Alaska), black_box(far), owner, board))
    });
}

fn bench_heuristics(c: &mut Criterion) {
    let game = manual_game(42);
    let board = game.board();
    c.bench_function("bot_heuristics", |b| {
        b.iter(|| {
            (
                deploy_target(black_box(board), PlayerId::Bot),
                best_attack(black_box(board), PlayerId::Bot),
                fortify_plan(black_box(board), PlayerId::Bot),
            )
        })
    });
}

fn bench_bot_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("bot_turn");
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("full_opening_turn", |b| {
        b.iter_batched(
            || manual_game(42),
            |mut game| play_turn(&mut game),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_combat,
    bench_reinforcements,
    bench_connectivity,
    bench_heuristics,
    bench_bot_turn,
);
criterion_main!(benches);
