use criterion::{black_box, criterion_group, criterion_main, Criterion};

use oneillo::board::{Board, Coord, Player};
use oneillo::eval::Strategy;
use oneillo::game::Game;
use oneillo::movegen::{is_legal_move, legal_moves};
use oneillo::protocol::pos::parse_position;
use oneillo::resolve::apply_move;
use oneillo::selfplay::{play_game, SelfPlayConfig};

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A busy midgame position with many legal moves for both sides.
const MIDGAME_POS: &str = "8/8/2wwwb2/2bbwb2/2bwbbb1/2wwwb2/3w4/8 b";

fn bench_is_legal_opening(c: &mut Criterion) {
    let board = Board::initial();
    let at: Coord = "d3".parse().unwrap();
    c.bench_function("is_legal_move_opening", |b| {
        b.iter(|| is_legal_move(black_box(&board), black_box(at), Player::Black))
    });
}

fn bench_legal_moves_opening(c: &mut Criterion) {
    let board = Board::initial();
    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| legal_moves(black_box(&board), Player::Black))
    });
}

fn bench_legal_moves_midgame(c: &mut Criterion) {
    let (board, turn) = parse_position(MIDGAME_POS).unwrap();
    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| legal_moves(black_box(&board), turn))
    });
}

fn bench_apply_midgame(c: &mut Criterion) {
    let (board, turn) = parse_position(MIDGAME_POS).unwrap();
    let moves = legal_moves(&board, turn);
    c.bench_function("apply_every_midgame_move", |b| {
        b.iter(|| {
            for &m in &moves {
                let mut scratch = board;
                black_box(apply_move(&mut scratch, m, turn));
            }
        })
    });
}

fn bench_positional_choice(c: &mut Criterion) {
    let (board, turn) = parse_position(MIDGAME_POS).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("positional_choose_midgame", |b| {
        b.iter(|| Strategy::Positional.choose(black_box(&board), turn, &mut rng))
    });
}

fn bench_full_random_game(c: &mut Criterion) {
    let config = SelfPlayConfig {
        num_games: 1,
        threads: 1,
        quiet: true,
        ..Default::default()
    };
    c.bench_function("full_random_game", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| play_game(black_box(&config), 0, &mut rng))
    });
}

fn bench_game_clone(c: &mut Criterion) {
    let game = Game::new();
    c.bench_function("game_clone", |b| b.iter(|| black_box(&game).clone()));
}

criterion_group!(
    benches,
    bench_is_legal_opening,
    bench_legal_moves_opening,
    bench_legal_moves_midgame,
    bench_apply_midgame,
    bench_positional_choice,
    bench_full_random_game,
    bench_game_clone,
);
criterion_main!(benches);
