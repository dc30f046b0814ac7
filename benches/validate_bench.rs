use checkers_engine::{Board, GameSession, Move, Player, Square, player_has_jump, validate_move};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_jump_scan_opening(c: &mut Criterion) {
    let board = Board::starting_position();
    c.bench_function("jump_scan_opening", |b| {
        b.iter(|| player_has_jump(&board, Player::PlayerOne))
    });
}

fn bench_validate_all_opening_moves(c: &mut Criterion) {
    let board = Board::starting_position();
    c.bench_function("validate_all_opening_moves", |b| {
        b.iter(|| {
            let mut valid = 0usize;
            for fx in 0..8 {
                for fy in 0..8 {
                    for tx in 0..8 {
                        for ty in 0..8 {
                            let mv = Move {
                                player: Player::PlayerOne,
                                from: Square::new(fx, fy),
                                to: Square::new(tx, ty),
                            };
                            if validate_move(&board, &mv).valid {
                                valid += 1;
                            }
                        }
                    }
                }
            }
            valid
        })
    });
}

fn bench_opening_exchange(c: &mut Criterion) {
    let moves = [
        Move {
            player: Player::PlayerOne,
            from: Square::new(5, 2),
            to: Square::new(4, 3),
        },
        Move {
            player: Player::PlayerTwo,
            from: Square::new(2, 5),
            to: Square::new(3, 4),
        },
        Move {
            player: Player::PlayerOne,
            from: Square::new(4, 3),
            to: Square::new(2, 5),
        },
        Move {
            player: Player::PlayerTwo,
            from: Square::new(1, 6),
            to: Square::new(3, 4),
        },
    ];
    c.bench_function("opening_exchange", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            for mv in &moves {
                session.submit_move(mv);
            }
            session.snapshot()
        })
    });
}

criterion_group!(
    benches,
    bench_jump_scan_opening,
    bench_validate_all_opening_moves,
    bench_opening_exchange
);
criterion_main!(benches);
